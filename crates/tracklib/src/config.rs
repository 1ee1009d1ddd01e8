/// Grid dimensions used by `CellGrid::default()` and `TrackGridPlugin`.
pub const DEFAULT_GRID_WIDTH: usize = 64;
pub const DEFAULT_GRID_HEIGHT: usize = 64;

pub const NUM_DIRECTIONS: u8 = 4;
pub const NUM_ROTATIONS: u8 = 4;

/// Upper bound on `width * height` for any grid. Resizes beyond it are
/// rejected.
pub const MAX_GRID_CELLS: usize = 1 << 24;
