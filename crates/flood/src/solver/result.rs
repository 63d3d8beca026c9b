//! Solve output: per-cell depths plus aggregate statistics.

use serde::{Deserialize, Serialize};

use crate::grid::{Grid, Index};
use crate::height::Height;

/// Standing water computed for one grid and water level.
///
/// `depths` is indexed like the grid's flat storage. Sentinel cells always
/// read zero and should be ignored by callers working in logical coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloodResult<H: Height> {
    /// Water depth per cell; zero for dry and sentinel cells.
    pub depths: Vec<H>,
    /// Sum of all depths, in the height type's wider accumulator.
    pub volume: H::Volume,
    /// Number of submerged cells.
    pub flooded_count: usize,
}

impl<H: Height> FloodResult<H> {
    /// A dry result for a grid with `cell_count` stored cells.
    pub fn dry(cell_count: usize) -> Self {
        Self {
            depths: vec![H::ZERO; cell_count],
            volume: H::Volume::default(),
            flooded_count: 0,
        }
    }

    #[inline]
    pub fn depth(&self, index: Index) -> H {
        self.depths[index]
    }

    /// Depth at a logical coordinate of `grid`.
    pub fn depth_at(&self, grid: &Grid<H>, coords: &[usize]) -> H {
        self.depths[grid.index_of(coords)]
    }

    #[inline]
    pub fn is_flooded(&self, index: Index) -> bool {
        self.depths[index] > H::ZERO
    }

    /// Water surface (ground + depth) for a submerged cell, `None` when dry.
    pub fn surface(&self, grid: &Grid<H>, index: Index) -> Option<H> {
        self.is_flooded(index)
            .then(|| grid.height_at(index) + self.depths[index])
    }

    /// Deepest water anywhere, zero when nothing is flooded.
    pub fn max_depth(&self) -> H {
        self.depths.iter().fold(H::ZERO, |deepest, &depth| {
            if depth > deepest {
                depth
            } else {
                deepest
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_result() {
        let result: FloodResult<i32> = FloodResult::dry(12);
        assert_eq!(result.depths.len(), 12);
        assert_eq!(result.volume, 0);
        assert_eq!(result.flooded_count, 0);
        assert_eq!(result.max_depth(), 0);
        assert!(!result.is_flooded(3));
    }

    #[test]
    fn test_depth_lookup_and_surface() {
        let grid = Grid::from_real_heights(vec![2], &[1, 4]).unwrap();
        let mut result = FloodResult::dry(grid.cell_count());
        let cell = grid.index_of(&[0]);
        result.depths[cell] = 2;
        assert_eq!(result.depth_at(&grid, &[0]), 2);
        assert_eq!(result.surface(&grid, cell), Some(3));
        assert_eq!(result.surface(&grid, grid.index_of(&[1])), None);
        assert_eq!(result.max_depth(), 2);
    }

    #[test]
    fn test_result_serde_roundtrip() {
        let result = FloodResult {
            depths: vec![0.0f32, 1.5, 0.25, 0.0],
            volume: 1.75,
            flooded_count: 2,
        };
        let json = serde_json::to_string(&result).expect("serialize");
        let restored: FloodResult<f32> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, result);
    }
}
