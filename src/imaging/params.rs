//! Parameter types for crop invocations.
//!
//! These structs describe *what* to crop, not *how*. They sit between the
//! [`dispatch`](crate::dispatch) module (which decides what to crop) and a
//! [`CropTool`](super::CropTool) (which runs the external program), so a
//! recording tool can stand in for ImageMagick in tests.

use serde::Deserialize;
use std::path::PathBuf;

/// Tile grid for a `-crop NxM@` operation.
///
/// Read from config as `[columns, rows]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "[u32; 2]")]
pub struct Grid {
    pub columns: u32,
    pub rows: u32,
}

impl Grid {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// ImageMagick geometry for an equal-tile crop, e.g. `2x2@`.
    pub fn geometry(self) -> String {
        format!("{}x{}@", self.columns, self.rows)
    }

    /// Number of tiles the tool is asked to produce.
    pub fn tile_count(self) -> u32 {
        self.columns * self.rows
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(2, 2)
    }
}

impl From<[u32; 2]> for Grid {
    fn from([columns, rows]: [u32; 2]) -> Self {
        Self::new(columns, rows)
    }
}

/// Everything needed to crop one input into tiles.
#[derive(Debug, Clone, PartialEq)]
pub struct CropParams {
    pub source: PathBuf,
    /// Output path containing a `%d` placeholder for the tile index.
    pub output_pattern: PathBuf,
    pub grid: Grid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_two_by_two() {
        let grid = Grid::default();
        assert_eq!(grid.geometry(), "2x2@");
        assert_eq!(grid.tile_count(), 4);
    }

    #[test]
    fn geometry_is_columns_then_rows() {
        assert_eq!(Grid::new(3, 1).geometry(), "3x1@");
        assert_eq!(Grid::new(3, 1).tile_count(), 3);
    }

    #[test]
    fn grid_parses_from_pair() {
        let grid: Grid = [4, 2].into();
        assert_eq!(grid, Grid::new(4, 2));
    }
}
