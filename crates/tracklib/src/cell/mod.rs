//! A single routing cell.
//!
//! A cell combines a kind (empty, plain track of some shape, or a junction
//! with a switching policy and a handedness), an orientation and one memory
//! bit. Routing normalises the entry direction into the cell's unrotated
//! frame, looks up the exit in that frame and rotates it back.
//!
//! Pairing a type with a shape from the wrong family is not representable in
//! `CellKind`; the host-facing code based API rejects such pairings with
//! `RoutingError::InvalidConfiguration` when they are assigned.

mod error;
mod routing;
mod types;

pub use error::RoutingError;
pub use types::*;
