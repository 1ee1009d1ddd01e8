//! The cell grid: a rectangular, resizable store of cells, and the ECS
//! plumbing that lets a host route trains through it with events.
//!
//! ## Data model
//! - `CellGrid`: flat row-major buffer of `Cell`s addressed by `y * width + x`
//! - `GridError`: out-of-bounds access, oversized or inconsistent dimensions,
//!   or a routing failure at a coordinate
//! - Events: `EnterCellEvent` in, `CellRoutedEvent` / `RoutingFailedEvent` out,
//!   plus `SetCellStateEvent`, `RotateCellEvent` and `ResizeGridEvent` for edits
//!
//! `CellGrid::to_bytes` / `CellGrid::from_bytes` save and restore a grid with
//! bitcode; restoring fails with `GridSaveError` instead of building a grid
//! whose buffer does not match its dimensions.

mod error;
mod events;
mod grid;
mod persistence;
mod plugin;
mod systems;


pub use error::{GridError, GridSaveError};
pub use events::{
    CellRoutedEvent, EnterCellEvent, ResizeGridEvent, RotateCellEvent, RoutingFailedEvent,
    SetCellStateEvent,
};
pub use grid::CellGrid;
pub use plugin::TrackGridPlugin;
pub use systems::{
    handle_enter_cell, handle_resize_grid, handle_rotate_cell, handle_set_cell_state,
};
