//! Rail cell routing engine.
//!
//! Given a train entering a cell through one side, a cell reports the side it
//! leaves through and updates its junction memory. Cells live in a resizable
//! `CellGrid` resource that hosts drive either directly or through the events
//! registered by `TrackGridPlugin`.

pub mod cell;
pub mod cell_grid;
pub mod config;
pub mod direction;
pub mod sets;

#[cfg(test)]
pub mod test_harness;

pub use cell::{
    Cell, CellKind, CellType, JunctionPolicy, JunctionShape, RoutingError, TrackShape,
};
pub use cell_grid::{CellGrid, GridError, GridSaveError, TrackGridPlugin};
pub use direction::{CellState, Direction, Rotation};
