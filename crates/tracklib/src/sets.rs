//! Ordering of the track grid systems inside the `Update` schedule.
//!
//! ```text
//! Edit  →  Route
//! ```
//!
//! * **Edit**: Layout changes requested by the host: resizes, explicit
//!   junction state assignments, rotations.
//! * **Route**: Trains entering cells. Runs after `Edit` so a lever thrown in
//!   the same frame is seen by the next train.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrackGridSet {
    Edit,
    Route,
}
