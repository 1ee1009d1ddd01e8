use bevy::prelude::*;

use super::events::{
    CellRoutedEvent, EnterCellEvent, ResizeGridEvent, RotateCellEvent, RoutingFailedEvent,
    SetCellStateEvent,
};
use super::grid::CellGrid;

/// Apply resize requests, each as a single combined resize. Oversized
/// requests are logged and dropped.
pub fn handle_resize_grid(mut events: EventReader<ResizeGridEvent>, mut grid: ResMut<CellGrid>) {
    for event in events.read() {
        let (old_width, old_height) = grid.size();
        match grid.resize(event.width, event.height) {
            Ok(()) => info!(
                "CellGrid: resized {}x{} -> {}x{}",
                old_width, old_height, event.width, event.height
            ),
            Err(e) => warn!("ResizeGridEvent: {}", e),
        }
    }
}

/// Explicit state assignment. This is the only way a sprung junction changes
/// branch.
pub fn handle_set_cell_state(
    mut events: EventReader<SetCellStateEvent>,
    mut grid: ResMut<CellGrid>,
) {
    for event in events.read() {
        match grid.get_mut(event.x, event.y) {
            Ok(cell) => cell.state = event.state,
            Err(e) => warn!("SetCellStateEvent: {}", e),
        }
    }
}

pub fn handle_rotate_cell(mut events: EventReader<RotateCellEvent>, mut grid: ResMut<CellGrid>) {
    for event in events.read() {
        match grid.get_mut(event.x, event.y) {
            Ok(cell) => {
                cell.rotate(event.rotation);
            }
            Err(e) => warn!("RotateCellEvent: {}", e),
        }
    }
}

/// Route every entering train in event order. Failures are reported as
/// `RoutingFailedEvent`s; no exit is guessed.
pub fn handle_enter_cell(
    mut events: EventReader<EnterCellEvent>,
    mut grid: ResMut<CellGrid>,
    mut routed: EventWriter<CellRoutedEvent>,
    mut failed: EventWriter<RoutingFailedEvent>,
) {
    for event in events.read() {
        match grid.traverse_at(event.x, event.y, event.from) {
            Ok(exit) => {
                let next = grid.neighbor(event.x, event.y, exit);
                debug!(
                    "CellGrid: ({}, {}) routed {:?} -> {:?}",
                    event.x, event.y, event.from, exit
                );
                routed.send(CellRoutedEvent {
                    x: event.x,
                    y: event.y,
                    from: event.from,
                    exit,
                    next,
                });
            }
            Err(error) => {
                warn!(
                    "CellGrid: routing failed at ({}, {}) entering from {:?}: {}",
                    event.x, event.y, event.from, error
                );
                failed.send(RoutingFailedEvent {
                    x: event.x,
                    y: event.y,
                    from: event.from,
                    error,
                });
            }
        }
    }
}
