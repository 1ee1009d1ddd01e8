//! Compass directions and quarter-turn rotations.
//!
//! Rotations form the cyclic group Z4 under composition. Directions are
//! mapped through rotations; `Direction::Invalid` is absorbing, so rotating
//! it always yields `Invalid` again.

use std::ops::{Add, AddAssign, Neg, Not};

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::config::{NUM_DIRECTIONS, NUM_ROTATIONS};

// =============================================================================
// Rotation
// =============================================================================

/// Clockwise quarter-turn count, reduced mod 4.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Encode, Decode,
)]
pub enum Rotation {
    #[default]
    None,
    Cw90,
    Cw180,
    Cw270,
}

impl Rotation {
    pub const NONE: Rotation = Rotation::None;
    pub const CW_90: Rotation = Rotation::Cw90;
    pub const CW_180: Rotation = Rotation::Cw180;
    pub const CW_270: Rotation = Rotation::Cw270;
    pub const CW_360: Rotation = Rotation::None;
    pub const CCW_90: Rotation = Rotation::Cw270;
    pub const CCW_180: Rotation = Rotation::Cw180;
    pub const CCW_270: Rotation = Rotation::Cw90;
    pub const CCW_360: Rotation = Rotation::None;

    pub const ALL: [Rotation; 4] = [
        Rotation::None,
        Rotation::Cw90,
        Rotation::Cw180,
        Rotation::Cw270,
    ];

    /// Build a rotation from any number of clockwise quarter turns.
    /// Negative counts turn counter-clockwise.
    pub fn from_quarter_turns(turns: i32) -> Self {
        match turns.rem_euclid(NUM_ROTATIONS as i32) {
            0 => Rotation::None,
            1 => Rotation::Cw90,
            2 => Rotation::Cw180,
            _ => Rotation::Cw270,
        }
    }

    pub fn quarter_turns(self) -> u8 {
        match self {
            Rotation::None => 0,
            Rotation::Cw90 => 1,
            Rotation::Cw180 => 2,
            Rotation::Cw270 => 3,
        }
    }

    /// Group addition: apply `self`, then `other`.
    pub fn compose(self, other: Rotation) -> Rotation {
        Rotation::from_quarter_turns(i32::from(self.quarter_turns() + other.quarter_turns()))
    }

    /// The unique rotation `r` with `self.compose(r) == Rotation::NONE`.
    pub fn invert(self) -> Rotation {
        Rotation::from_quarter_turns(i32::from(NUM_ROTATIONS - self.quarter_turns()))
    }
}

impl Add for Rotation {
    type Output = Rotation;

    fn add(self, rhs: Rotation) -> Rotation {
        self.compose(rhs)
    }
}

impl AddAssign for Rotation {
    fn add_assign(&mut self, rhs: Rotation) {
        *self = self.compose(rhs);
    }
}

impl Neg for Rotation {
    type Output = Rotation;

    fn neg(self) -> Rotation {
        self.invert()
    }
}

// =============================================================================
// Direction
// =============================================================================

/// A side of a cell. `Invalid` stands for "no such direction".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Encode, Decode,
)]
pub enum Direction {
    #[default]
    Invalid,
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The four real directions in clockwise order starting at North.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn is_valid(self) -> bool {
        self != Direction::Invalid
    }

    fn index(self) -> Option<u8> {
        match self {
            Direction::Invalid => None,
            Direction::North => Some(0),
            Direction::East => Some(1),
            Direction::South => Some(2),
            Direction::West => Some(3),
        }
    }

    fn from_index(index: u8) -> Direction {
        Direction::CARDINALS[usize::from(index % NUM_DIRECTIONS)]
    }

    /// Map this direction through a clockwise rotation.
    /// `Invalid` maps to `Invalid` for every rotation.
    pub fn rotate(self, rotation: Rotation) -> Direction {
        match self.index() {
            Some(index) => Direction::from_index(index + rotation.quarter_turns()),
            None => Direction::Invalid,
        }
    }

    /// The direction on the other side of the cell.
    pub fn opposite(self) -> Direction {
        self.rotate(Rotation::CW_180)
    }
}

impl Add<Rotation> for Direction {
    type Output = Direction;

    fn add(self, rhs: Rotation) -> Direction {
        self.rotate(rhs)
    }
}

// =============================================================================
// CellState
// =============================================================================

/// The single memory bit of a cell.
///
/// Alternating junctions read the bit as `Zero`/`One`; sprung and lazy
/// junctions read the same two values as `LEFT_BRANCH`/`RIGHT_BRANCH`
/// (`Zero == LEFT_BRANCH`, `One == RIGHT_BRANCH`). Other cell types ignore it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Encode, Decode,
)]
pub enum CellState {
    #[default]
    Zero,
    One,
}

impl CellState {
    pub const NONE: CellState = CellState::Zero;
    pub const DEFAULT: CellState = CellState::Zero;
    pub const LEFT_BRANCH: CellState = CellState::Zero;
    pub const RIGHT_BRANCH: CellState = CellState::One;

    pub fn is_left_branch(self) -> bool {
        self == CellState::LEFT_BRANCH
    }

    pub fn is_right_branch(self) -> bool {
        self == CellState::RIGHT_BRANCH
    }

    pub fn toggled(self) -> CellState {
        match self {
            CellState::Zero => CellState::One,
            CellState::One => CellState::Zero,
        }
    }
}

impl Not for CellState {
    type Output = CellState;

    fn not(self) -> CellState {
        self.toggled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_aliases() {
        assert_eq!(Rotation::NONE, Rotation::CCW_360);
        assert_eq!(Rotation::CW_360, Rotation::NONE);
        assert_eq!(Rotation::CW_90, Rotation::CCW_270);
        assert_eq!(Rotation::CW_270, Rotation::CCW_90);
        assert_eq!(Rotation::CW_180, Rotation::CCW_180);
    }

    #[test]
    fn test_rotation_composition() {
        assert_eq!(Rotation::CW_90 + Rotation::CW_90, Rotation::CW_180);
        assert_eq!(Rotation::CW_90 + Rotation::CCW_90, Rotation::NONE);
        assert_eq!(Rotation::CW_270 + Rotation::CW_180, Rotation::CW_90);

        let mut r = Rotation::CW_180;
        r += Rotation::CW_90;
        assert_eq!(r, Rotation::CW_270);
        r += Rotation::CCW_180;
        assert_eq!(r, Rotation::CW_90);
    }

    #[test]
    fn test_rotation_group_laws() {
        for a in Rotation::ALL {
            assert_eq!(a + Rotation::NONE, a);
            assert_eq!(Rotation::NONE + a, a);
            assert_eq!(a.compose(a.invert()), Rotation::NONE, "inverse of {a:?}");
            assert_eq!(-(-a), a);
            for b in Rotation::ALL {
                assert_eq!(a + b, b + a);
                for c in Rotation::ALL {
                    assert_eq!((a + b) + c, a + (b + c), "associativity {a:?} {b:?} {c:?}");
                }
            }
        }
    }

    #[test]
    fn test_from_quarter_turns_reduces_mod_four() {
        assert_eq!(Rotation::from_quarter_turns(4), Rotation::NONE);
        assert_eq!(Rotation::from_quarter_turns(5), Rotation::CW_90);
        assert_eq!(Rotation::from_quarter_turns(-1), Rotation::CW_270);
        assert_eq!(Rotation::from_quarter_turns(-6), Rotation::CW_180);
    }

    #[test]
    fn test_direction_rotation() {
        assert_eq!(Direction::North.rotate(Rotation::CW_90), Direction::East);
        assert_eq!(Direction::West.rotate(Rotation::CW_90), Direction::North);
        assert_eq!(Direction::East + Rotation::CCW_90, Direction::North);
        assert_eq!(Direction::South + Rotation::CW_180, Direction::North);
        for d in Direction::CARDINALS {
            assert_eq!(d.rotate(Rotation::NONE), d);
            for r in Rotation::ALL {
                assert_eq!(d.rotate(r).rotate(-r), d);
            }
        }
    }

    #[test]
    fn test_invalid_direction_is_absorbing() {
        for r in Rotation::ALL {
            assert_eq!(Direction::Invalid.rotate(r), Direction::Invalid);
        }
        assert_eq!(Direction::Invalid.opposite(), Direction::Invalid);
        assert!(!Direction::Invalid.is_valid());
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
        assert_eq!(Direction::South.opposite(), Direction::North);
        assert_eq!(Direction::West.opposite(), Direction::East);
    }

    #[test]
    fn test_state_aliases_and_toggle() {
        assert_eq!(CellState::DEFAULT, CellState::Zero);
        assert_eq!(CellState::NONE, CellState::LEFT_BRANCH);
        assert_eq!(CellState::RIGHT_BRANCH, CellState::One);
        assert_eq!(!CellState::LEFT_BRANCH, CellState::RIGHT_BRANCH);
        assert_eq!(!!CellState::One, CellState::One);
        assert!(CellState::Zero.is_left_branch());
        assert!(CellState::One.is_right_branch());
    }
}
