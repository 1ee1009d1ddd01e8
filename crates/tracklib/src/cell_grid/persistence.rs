use bevy::prelude::*;

use super::error::GridSaveError;
use super::grid::{CellGrid, CellGridData};

impl CellGrid {
    /// Encode the grid, dimensions included, with bitcode.
    pub fn to_bytes(&self) -> Vec<u8> {
        bitcode::encode(&CellGridData::from(self))
    }

    /// Decode a grid written by `to_bytes`. The buffer length is checked
    /// against the stored dimensions before the grid is built.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GridSaveError> {
        let data: CellGridData = bitcode::decode(bytes)?;
        Ok(CellGrid::try_from(data)?)
    }

    /// Like `from_bytes`, but logs the failure and falls back to the
    /// default grid.
    pub fn from_bytes_or_default(bytes: &[u8]) -> Self {
        match Self::from_bytes(bytes) {
            Ok(grid) => grid,
            Err(e) => {
                warn!(
                    "CellGrid: failed to restore from {} bytes, falling back to default: {}",
                    bytes.len(),
                    e
                );
                CellGrid::default()
            }
        }
    }
}
