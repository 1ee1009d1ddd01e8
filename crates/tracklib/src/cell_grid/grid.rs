use bevy::prelude::*;
use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::config::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, MAX_GRID_CELLS};
use crate::direction::Direction;

use super::error::GridError;

/// Rectangular grid of cells, stored row-major in a single buffer.
///
/// Invariant: `cells.len() == width * height <= MAX_GRID_CELLS`. Every
/// constructor, including deserialization, checks it.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CellGridData")]
pub struct CellGrid {
    pub(super) cells: Vec<Cell>,
    pub(super) width: usize,
    pub(super) height: usize,
}

/// Unvalidated wire form of a `CellGrid`. Converted with `TryFrom` so stored
/// data cannot break the buffer invariant.
#[derive(Debug, Clone, Deserialize, Encode, Decode)]
pub(super) struct CellGridData {
    pub(super) cells: Vec<Cell>,
    pub(super) width: usize,
    pub(super) height: usize,
}

impl TryFrom<CellGridData> for CellGrid {
    type Error = GridError;

    fn try_from(data: CellGridData) -> Result<Self, GridError> {
        let len = checked_len(data.width, data.height)?;
        if len != data.cells.len() {
            return Err(GridError::InconsistentBuffer {
                cells: data.cells.len(),
                width: data.width,
                height: data.height,
            });
        }
        Ok(Self {
            cells: data.cells,
            width: data.width,
            height: data.height,
        })
    }
}

impl From<&CellGrid> for CellGridData {
    fn from(grid: &CellGrid) -> Self {
        Self {
            cells: grid.cells.clone(),
            width: grid.width,
            height: grid.height,
        }
    }
}

/// Buffer length for a `width` x `height` grid, or `TooLarge`.
fn checked_len(width: usize, height: usize) -> Result<usize, GridError> {
    width
        .checked_mul(height)
        .filter(|&len| len <= MAX_GRID_CELLS)
        .ok_or(GridError::TooLarge { width, height })
}

impl Default for CellGrid {
    fn default() -> Self {
        Self {
            cells: vec![Cell::default(); DEFAULT_GRID_WIDTH * DEFAULT_GRID_HEIGHT],
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

impl CellGrid {
    /// Create a grid with every cell empty. Fails with `TooLarge` past
    /// `MAX_GRID_CELLS`.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            cells: vec![Cell::default(); len],
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if self.in_bounds(x, y) {
            Ok(y * self.width + x)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Result<&Cell, GridError> {
        let idx = self.index(x, y)?;
        Ok(&self.cells[idx])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell, GridError> {
        let idx = self.index(x, y)?;
        Ok(&mut self.cells[idx])
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), GridError> {
        *self.get_mut(x, y)? = cell;
        Ok(())
    }

    /// Resize to `width` x `height` in one reallocation.
    ///
    /// Cells inside both the old and the new rectangle keep their contents;
    /// newly exposed cells are empty. A size past `MAX_GRID_CELLS` fails with
    /// `TooLarge` and leaves the grid unchanged.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), GridError> {
        if (width, height) == (self.width, self.height) {
            return Ok(());
        }

        let mut cells = vec![Cell::default(); checked_len(width, height)?];
        let keep_width = self.width.min(width);
        for y in 0..self.height.min(height) {
            let src = y * self.width;
            let dst = y * width;
            cells[dst..dst + keep_width].copy_from_slice(&self.cells[src..src + keep_width]);
        }

        self.cells = cells;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Equivalent to `resize(width, self.height())`. Calling `set_width` and
    /// `set_height` in either order yields the same grid as one `resize`.
    pub fn set_width(&mut self, width: usize) -> Result<(), GridError> {
        self.resize(width, self.height)
    }

    pub fn set_height(&mut self, height: usize) -> Result<(), GridError> {
        self.resize(self.width, height)
    }

    pub fn set_size(&mut self, (width, height): (usize, usize)) -> Result<(), GridError> {
        self.resize(width, height)
    }

    /// Exit direction of the cell at `(x, y)` for an entry through `from`.
    pub fn peek_at(&self, x: usize, y: usize, from: Direction) -> Result<Direction, GridError> {
        Ok(self.get(x, y)?.peek(from)?)
    }

    /// Route through the cell at `(x, y)`, applying its state mutation.
    pub fn traverse_at(
        &mut self,
        x: usize,
        y: usize,
        from: Direction,
    ) -> Result<Direction, GridError> {
        Ok(self.get_mut(x, y)?.traverse(from)?)
    }

    /// Coordinate of the cell adjacent to `(x, y)` through side `direction`.
    /// North is towards `y = 0`. Returns `None` when either coordinate is
    /// off the grid or the direction is `Invalid`.
    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        if !self.in_bounds(x, y) {
            return None;
        }
        match direction {
            Direction::North => y.checked_sub(1).map(|ny| (x, ny)),
            Direction::East => (x + 1 < self.width).then_some((x + 1, y)),
            Direction::South => (y + 1 < self.height).then_some((x, y + 1)),
            Direction::West => x.checked_sub(1).map(|nx| (nx, y)),
            Direction::Invalid => None,
        }
    }

    /// All cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i % width, i / width), cell))
    }

    /// True when every cell is still default-constructed.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| *cell == Cell::default())
    }
}
