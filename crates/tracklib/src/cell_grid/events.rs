use bevy::prelude::*;

use crate::direction::{CellState, Direction, Rotation};

use super::error::GridError;

/// A train enters the cell at `(x, y)` through side `from`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnterCellEvent {
    pub x: usize,
    pub y: usize,
    pub from: Direction,
}

/// The cell at `(x, y)` routed a train.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRoutedEvent {
    pub x: usize,
    pub y: usize,
    pub from: Direction,
    pub exit: Direction,
    /// Adjacent cell through `exit`, or `None` if the train leaves the grid.
    pub next: Option<(usize, usize)>,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingFailedEvent {
    pub x: usize,
    pub y: usize,
    pub from: Direction,
    pub error: GridError,
}

/// Externally set the memory bit of a cell (lever or signal).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetCellStateEvent {
    pub x: usize,
    pub y: usize,
    pub state: CellState,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotateCellEvent {
    pub x: usize,
    pub y: usize,
    pub rotation: Rotation,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeGridEvent {
    pub width: usize,
    pub height: usize,
}
