use std::fmt;

use crate::cell::RoutingError;
use crate::config::MAX_GRID_CELLS;

/// Errors from grid access and grid-level routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The coordinate lies outside the current grid dimensions.
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    /// The requested dimensions exceed `MAX_GRID_CELLS` or overflow `usize`.
    TooLarge { width: usize, height: usize },
    /// Stored cell data does not fill the stored dimensions.
    InconsistentBuffer {
        cells: usize,
        width: usize,
        height: usize,
    },
    /// The cell at the coordinate could not route the entry.
    Routing(RoutingError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "Cell ({x}, {y}) is out of bounds for a {width}x{height} grid"
            ),
            GridError::TooLarge { width, height } => write!(
                f,
                "A {width}x{height} grid exceeds the limit of {MAX_GRID_CELLS} cells"
            ),
            GridError::InconsistentBuffer {
                cells,
                width,
                height,
            } => write!(f, "{cells} cells do not fill a {width}x{height} grid"),
            GridError::Routing(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridError::Routing(e) => Some(e),
            GridError::OutOfBounds { .. }
            | GridError::TooLarge { .. }
            | GridError::InconsistentBuffer { .. } => None,
        }
    }
}

impl From<RoutingError> for GridError {
    fn from(e: RoutingError) -> Self {
        GridError::Routing(e)
    }
}

/// Errors from restoring a `CellGrid` out of saved bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridSaveError {
    /// Bitcode decoding failed (corrupt or truncated data).
    Decode(String),
    /// The bytes decoded but describe an impossible grid.
    Invalid(GridError),
}

impl fmt::Display for GridSaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridSaveError::Decode(msg) => write!(f, "Decoding error: {msg}"),
            GridSaveError::Invalid(e) => write!(f, "Invalid grid data: {e}"),
        }
    }
}

impl std::error::Error for GridSaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridSaveError::Invalid(e) => Some(e),
            GridSaveError::Decode(_) => None,
        }
    }
}

impl From<bitcode::Error> for GridSaveError {
    fn from(e: bitcode::Error) -> Self {
        GridSaveError::Decode(e.to_string())
    }
}

impl From<GridError> for GridSaveError {
    fn from(e: GridError) -> Self {
        GridSaveError::Invalid(e)
    }
}
