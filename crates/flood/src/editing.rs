//! Terrain editing.
//!
//! Interactive tools (brushes, scripted changes) read and write terrain
//! through [`HeightEditor`] or apply [`HeightEdit`]s to a grid. Every applied
//! edit reports a [`HeightChanged`] holding the value before and after, which
//! is enough for an undo history to replay it in either direction.

use rand::Rng;

use crate::config::{MAX_EDIT_DELTA, SCRIPTED_EDIT_COUNT};
use crate::error::GridError;
use crate::grid::{Grid, Index};
use crate::height::Height;

/// Read/write access to editable heights by logical coordinate.
pub trait HeightEditor<H: Height> {
    fn read_height(&self, coords: &[usize]) -> H;
    fn write_height(&mut self, coords: &[usize], value: H);
    /// Coordinates a tool may touch, axis 0 varying fastest.
    fn real_cells(&self) -> Vec<Vec<usize>>;
}

impl<H: Height> HeightEditor<H> for Grid<H> {
    fn read_height(&self, coords: &[usize]) -> H {
        self.height(coords)
    }

    fn write_height(&mut self, coords: &[usize], value: H) {
        *self.height_mut(coords) = value;
    }

    fn real_cells(&self) -> Vec<Vec<usize>> {
        self.real_indices()
            .into_iter()
            .filter_map(|index| self.coords_of(index))
            .collect()
    }
}

/// Requested change: add `delta` to the height at logical `coords`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightEdit<H> {
    pub coords: Vec<usize>,
    pub delta: H,
}

/// A height change that was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightChanged<H> {
    pub index: Index,
    pub previous: H,
    pub current: H,
}

impl<H: Height> HeightChanged<H> {
    /// The change that undoes this one.
    pub fn reversed(self) -> Self {
        Self {
            index: self.index,
            previous: self.current,
            current: self.previous,
        }
    }

    /// Write `current` back into `grid`.
    pub fn replay(&self, grid: &mut Grid<H>) {
        *grid.height_at_mut(self.index) = self.current;
    }
}

impl<H: Height> Grid<H> {
    /// Apply one edit. Out-of-range coordinates, or a result the grid may
    /// not hold, leave the grid untouched.
    pub fn apply_edit(&mut self, edit: &HeightEdit<H>) -> Result<HeightChanged<H>, GridError> {
        if !self.contains(&edit.coords) {
            return Err(GridError::OutOfBounds {
                coords: edit.coords.clone(),
                sizes: self.sizes(),
            });
        }
        let index = self.index_of(&edit.coords);
        let previous = self.height_at(index);
        let current = previous + edit.delta;
        if !current.is_valid() {
            return Err(GridError::InvalidHeight { index });
        }
        *self.height_at_mut(index) = current;
        Ok(HeightChanged {
            index,
            previous,
            current,
        })
    }
}

/// Random edits over a grid of logical `sizes`, drawn from `rng`.
///
/// Deltas lie in `[-MAX_EDIT_DELTA, MAX_EDIT_DELTA]`. A grid without real
/// cells gets no edits.
pub fn scripted_edits(sizes: &[usize], rng: &mut impl Rng) -> Vec<HeightEdit<f32>> {
    if sizes.is_empty() || sizes.contains(&0) {
        return Vec::new();
    }
    (0..SCRIPTED_EDIT_COUNT)
        .map(|_| HeightEdit {
            coords: sizes.iter().map(|&s| rng.gen_range(0..s)).collect(),
            delta: rng.gen_range(-MAX_EDIT_DELTA..=MAX_EDIT_DELTA),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_apply_edit_reports_change() {
        let mut grid = Grid::from_real_heights(vec![2, 2], &[1, 2, 3, 4]).unwrap();
        let change = grid
            .apply_edit(&HeightEdit {
                coords: vec![1, 1],
                delta: 5,
            })
            .unwrap();
        assert_eq!(change.index, grid.index_of(&[1, 1]));
        assert_eq!(change.previous, 4);
        assert_eq!(change.current, 9);
        assert_eq!(grid.height(&[1, 1]), 9);
    }

    #[test]
    fn test_apply_edit_out_of_bounds_is_rejected() {
        let mut grid = Grid::from_real_heights(vec![2, 2], &[1, 2, 3, 4]).unwrap();
        let before = grid.clone();
        let err = grid
            .apply_edit(&HeightEdit {
                coords: vec![2, 0],
                delta: 1,
            })
            .unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_apply_edit_far_out_of_range_is_rejected() {
        let mut grid = Grid::from_real_heights(vec![3], &[4, 5, 6]).unwrap();
        let err = grid
            .apply_edit(&HeightEdit {
                coords: vec![usize::MAX],
                delta: 1,
            })
            .unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
    }

    #[test]
    fn test_apply_edit_rejects_non_finite_result() {
        let mut grid = Grid::from_real_heights(vec![2], &[0.5f32, 1.0]).unwrap();
        let before = grid.clone();
        let err = grid
            .apply_edit(&HeightEdit {
                coords: vec![1],
                delta: f32::NAN,
            })
            .unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidHeight {
                index: grid.index_of(&[1])
            }
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_reversed_change_undoes_edit() {
        let mut grid = Grid::from_real_heights(vec![3], &[4, 5, 6]).unwrap();
        let before = grid.clone();
        let change = grid
            .apply_edit(&HeightEdit {
                coords: vec![0],
                delta: -3,
            })
            .unwrap();
        change.reversed().replay(&mut grid);
        assert_eq!(grid, before);
        change.replay(&mut grid);
        assert_eq!(grid.height(&[0]), 1);
    }

    #[test]
    fn test_editor_reads_and_writes_by_coords() {
        let mut grid: Grid<i32> = Grid::new(vec![3, 2]);
        grid.write_height(&[2, 1], 8);
        assert_eq!(grid.read_height(&[2, 1]), 8);
        assert_eq!(grid.height_at(grid.index_of(&[2, 1])), 8);
    }

    #[test]
    fn test_real_cells_lists_logical_coords() {
        let grid: Grid<i32> = Grid::new(vec![3, 2]);
        let cells = grid.real_cells();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], vec![0, 0]);
        assert_eq!(cells[1], vec![1, 0]);
        assert_eq!(cells[5], vec![2, 1]);
    }

    #[test]
    fn test_scripted_edits_in_range_and_deterministic() {
        let sizes = [8, 5, 3];
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let edits = scripted_edits(&sizes, &mut rng);
        assert_eq!(edits.len(), SCRIPTED_EDIT_COUNT);
        for edit in &edits {
            assert!(edit.coords.iter().zip(&sizes).all(|(&c, &s)| c < s));
            assert!(edit.delta.abs() <= MAX_EDIT_DELTA);
        }

        let mut again = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(scripted_edits(&sizes, &mut again), edits);
    }

    #[test]
    fn test_scripted_edits_empty_grid() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(scripted_edits(&[4, 0], &mut rng).is_empty());
        assert!(scripted_edits(&[], &mut rng).is_empty());
    }
}
