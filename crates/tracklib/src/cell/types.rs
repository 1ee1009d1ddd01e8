//! Cell kinds, shapes and the `Cell` aggregate.

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::direction::{CellState, Direction, Rotation};

use super::error::RoutingError;

// =============================================================================
// Type / shape enums
// =============================================================================

/// Flat cell type as exposed to hosts. Selects the routing table and the
/// state-mutation rule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Encode, Decode,
)]
pub enum CellType {
    #[default]
    None,
    Track,
    SprungJunction,
    LazyJunction,
    AlternatingJunction,
}

/// Geometry of a plain track cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Encode, Decode,
)]
pub enum TrackShape {
    #[default]
    Straight,
    Curve,
    Cross,
    DoubleCurve,
}

impl TrackShape {
    pub fn code(self) -> u8 {
        match self {
            TrackShape::Straight => 0,
            TrackShape::Curve => 1,
            TrackShape::Cross => 2,
            TrackShape::DoubleCurve => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<TrackShape> {
        match code {
            0 => Some(TrackShape::Straight),
            1 => Some(TrackShape::Curve),
            2 => Some(TrackShape::Cross),
            3 => Some(TrackShape::DoubleCurve),
            _ => None,
        }
    }
}

/// Handedness of a junction: which two sides its arms leave through.
/// The base is always local North.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Encode, Decode,
)]
pub enum JunctionShape {
    #[default]
    LeftHand,
    RightHand,
    Symmetric,
}

impl JunctionShape {
    pub fn code(self) -> u8 {
        match self {
            JunctionShape::LeftHand => 0,
            JunctionShape::RightHand => 1,
            JunctionShape::Symmetric => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<JunctionShape> {
        match code {
            0 => Some(JunctionShape::LeftHand),
            1 => Some(JunctionShape::RightHand),
            2 => Some(JunctionShape::Symmetric),
            _ => None,
        }
    }

    /// Common connection point, in the local frame.
    pub fn base(self) -> Direction {
        Direction::North
    }

    /// Arm taken from the base while the state reads `LEFT_BRANCH`.
    pub fn left_arm(self) -> Direction {
        match self {
            JunctionShape::LeftHand | JunctionShape::Symmetric => Direction::East,
            JunctionShape::RightHand => Direction::South,
        }
    }

    /// Arm taken from the base while the state reads `RIGHT_BRANCH`.
    pub fn right_arm(self) -> Direction {
        match self {
            JunctionShape::LeftHand => Direction::South,
            JunctionShape::RightHand | JunctionShape::Symmetric => Direction::West,
        }
    }

    pub fn is_arm(self, local: Direction) -> bool {
        local == self.left_arm() || local == self.right_arm()
    }
}

/// How a junction's memory bit evolves under traffic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Encode, Decode,
)]
pub enum JunctionPolicy {
    /// Branch only changes by explicit assignment (lever or signal).
    #[default]
    Sprung,
    /// Remembers the arm the last train arrived through.
    Lazy,
    /// Flips on every train entering through the base; arms are exit-only.
    Alternating,
}

impl JunctionPolicy {
    pub fn cell_type(self) -> CellType {
        match self {
            JunctionPolicy::Sprung => CellType::SprungJunction,
            JunctionPolicy::Lazy => CellType::LazyJunction,
            JunctionPolicy::Alternating => CellType::AlternatingJunction,
        }
    }
}

/// Type and shape together. Only shapes of the matching family can be paired
/// with a type.
///
/// An empty cell has no geometry but keeps the variant code it was given, so
/// switching a cell off and on again restores its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub enum CellKind {
    Empty { variant: u8 },
    Track(TrackShape),
    Junction(JunctionPolicy, JunctionShape),
}

impl Default for CellKind {
    fn default() -> Self {
        CellKind::Empty { variant: 0 }
    }
}

impl CellKind {
    /// Resolve a host `(type, variant code)` pair.
    pub fn from_codes(cell_type: CellType, variant: u8) -> Result<CellKind, RoutingError> {
        let policy = match cell_type {
            CellType::None => return Ok(CellKind::Empty { variant }),
            CellType::Track => {
                return TrackShape::from_code(variant)
                    .map(CellKind::Track)
                    .ok_or(RoutingError::InvalidConfiguration)
            }
            CellType::SprungJunction => JunctionPolicy::Sprung,
            CellType::LazyJunction => JunctionPolicy::Lazy,
            CellType::AlternatingJunction => JunctionPolicy::Alternating,
        };
        JunctionShape::from_code(variant)
            .map(|shape| CellKind::Junction(policy, shape))
            .ok_or(RoutingError::InvalidConfiguration)
    }

    pub fn is_empty(self) -> bool {
        matches!(self, CellKind::Empty { .. })
    }

    pub fn cell_type(self) -> CellType {
        match self {
            CellKind::Empty { .. } => CellType::None,
            CellKind::Track(_) => CellType::Track,
            CellKind::Junction(policy, _) => policy.cell_type(),
        }
    }

    /// Ordinal of the shape within its family; the retained code for empty
    /// cells.
    pub fn variant_code(self) -> u8 {
        match self {
            CellKind::Empty { variant } => variant,
            CellKind::Track(shape) => shape.code(),
            CellKind::Junction(_, shape) => shape.code(),
        }
    }
}

// =============================================================================
// Cell
// =============================================================================

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Encode, Decode,
)]
pub struct Cell {
    pub kind: CellKind,
    pub rotation: Rotation,
    pub state: CellState,
}

impl Cell {
    pub fn new(kind: CellKind, rotation: Rotation, state: CellState) -> Self {
        Self {
            kind,
            rotation,
            state,
        }
    }

    pub fn track(shape: TrackShape) -> Self {
        Self::new(CellKind::Track(shape), Rotation::NONE, CellState::DEFAULT)
    }

    pub fn junction(policy: JunctionPolicy, shape: JunctionShape) -> Self {
        Self::new(
            CellKind::Junction(policy, shape),
            Rotation::NONE,
            CellState::LEFT_BRANCH,
        )
    }

    /// Build a cell from host codes. Fails with `InvalidConfiguration` if the
    /// variant code has no meaning for `cell_type`.
    pub fn from_codes(
        cell_type: CellType,
        variant: u8,
        rotation: Rotation,
        state: CellState,
    ) -> Result<Self, RoutingError> {
        Ok(Self::new(
            CellKind::from_codes(cell_type, variant)?,
            rotation,
            state,
        ))
    }

    pub fn cell_type(&self) -> CellType {
        self.kind.cell_type()
    }

    pub fn variant_code(&self) -> u8 {
        self.kind.variant_code()
    }

    /// Change the type, keeping the current variant code, rotation and state.
    /// On failure the cell is left untouched.
    pub fn set_type(&mut self, cell_type: CellType) -> Result<(), RoutingError> {
        self.kind = CellKind::from_codes(cell_type, self.variant_code())?;
        Ok(())
    }

    /// Change the variant code, keeping the current type.
    /// On failure the cell is left untouched.
    pub fn set_variant_code(&mut self, variant: u8) -> Result<(), RoutingError> {
        self.kind = CellKind::from_codes(self.cell_type(), variant)?;
        Ok(())
    }

    /// Compose `rotation` into the cell's orientation.
    pub fn rotate(&mut self, rotation: Rotation) -> &mut Self {
        self.rotation += rotation;
        self
    }

    pub fn rotated(mut self, rotation: Rotation) -> Self {
        self.rotation += rotation;
        self
    }

    pub fn with_state(mut self, state: CellState) -> Self {
        self.state = state;
        self
    }
}
