//! Exit lookup and state mutation.

use crate::direction::{CellState, Direction};

use super::error::RoutingError;
use super::types::{Cell, CellKind, JunctionPolicy, JunctionShape, TrackShape};

impl TrackShape {
    /// Local exit for a local entry, or `None` if the entry is not wired.
    pub(super) fn local_exit(self, local: Direction) -> Option<Direction> {
        match (self, local) {
            (TrackShape::Straight, Direction::North | Direction::South) => Some(local.opposite()),
            (TrackShape::Curve | TrackShape::DoubleCurve, Direction::North) => {
                Some(Direction::East)
            }
            (TrackShape::Curve | TrackShape::DoubleCurve, Direction::East) => {
                Some(Direction::North)
            }
            (TrackShape::DoubleCurve, Direction::South) => Some(Direction::West),
            (TrackShape::DoubleCurve, Direction::West) => Some(Direction::South),
            (TrackShape::Cross, _) if local.is_valid() => Some(local.opposite()),
            _ => None,
        }
    }
}

impl JunctionShape {
    fn local_exit(
        self,
        policy: JunctionPolicy,
        state: CellState,
        local: Direction,
    ) -> Option<Direction> {
        if local == self.base() {
            return Some(if state.is_left_branch() {
                self.left_arm()
            } else {
                self.right_arm()
            });
        }
        // Alternating junctions only accept trains through the base.
        if policy != JunctionPolicy::Alternating && self.is_arm(local) {
            return Some(self.base());
        }
        None
    }
}

impl Cell {
    /// Exit direction for a train entering through `from`, without touching
    /// the cell's state.
    pub fn peek(&self, from: Direction) -> Result<Direction, RoutingError> {
        if !from.is_valid() {
            return Err(RoutingError::InvalidEntryDirection);
        }
        let local = from.rotate(-self.rotation);
        let local_exit = match self.kind {
            CellKind::Empty { .. } => None,
            // Cross routes in the world frame. Its geometry is symmetric under
            // every rotation, so the result matches the local-frame lookup.
            CellKind::Track(TrackShape::Cross) => return Ok(from.opposite()),
            CellKind::Track(shape) => shape.local_exit(local),
            CellKind::Junction(policy, shape) => shape.local_exit(policy, self.state, local),
        };
        local_exit
            .map(|exit| exit.rotate(self.rotation))
            .ok_or(RoutingError::InvalidEntryDirection)
    }

    /// Route a train entering through `from` and apply the junction's
    /// mutation rule. The returned exit is computed from the state before
    /// mutation, so it always equals what `peek` returned.
    pub fn traverse(&mut self, from: Direction) -> Result<Direction, RoutingError> {
        let exit = self.peek(from)?;
        let local = from.rotate(-self.rotation);

        if let CellKind::Junction(policy, shape) = self.kind {
            match policy {
                JunctionPolicy::Alternating => {
                    if local == shape.base() {
                        self.state = !self.state;
                    }
                }
                JunctionPolicy::Lazy => {
                    if local == shape.left_arm() {
                        self.state = CellState::LEFT_BRANCH;
                    } else if local == shape.right_arm() {
                        self.state = CellState::RIGHT_BRANCH;
                    }
                }
                JunctionPolicy::Sprung => {}
            }
        }

        Ok(exit)
    }
}
