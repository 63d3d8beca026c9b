//! Frontier-driven breadth-first expansion and real-cell enumeration.

use super::{Grid, Index};
use crate::height::Height;

impl<H: Height> Grid<H> {
    /// Grow `frontier` breadth-first in place.
    ///
    /// With `include_seeds`, `visit(frontier, seed, seed)` runs first for every
    /// element already present. Then, sweep after sweep, `visit(frontier,
    /// origin, neighbor)` runs for each neighbor of every element appended
    /// since the previous sweep (the first sweep starts at `start`). The
    /// visitor appends newly discovered cells to `frontier`; expansion stops
    /// after a sweep that appends nothing.
    pub fn breadth_first_expand<F>(
        &self,
        frontier: &mut Vec<Index>,
        start: usize,
        include_seeds: bool,
        mut visit: F,
    ) where
        F: FnMut(&mut Vec<Index>, Index, Index),
    {
        if include_seeds {
            for i in 0..frontier.len() {
                let seed = frontier[i];
                visit(frontier, seed, seed);
            }
        }

        let mut begin = start;
        loop {
            let end = frontier.len();
            if begin >= end {
                break;
            }
            for j in begin..end {
                let origin = frontier[j];
                for &stride in &self.strides {
                    visit(frontier, origin, origin - stride);
                    visit(frontier, origin, origin + stride);
                }
            }
            begin = end;
        }
    }

    /// Visit every non-sentinel cell, axis 0 varying fastest.
    pub fn for_each_real_index(&self, mut visit: impl FnMut(Index)) {
        if self.is_degenerate() {
            return;
        }
        let first = vec![1; self.sizes.len()];
        let last: Vec<usize> = self.sizes.iter().map(|&s| s - 2).collect();
        self.for_each_in_box(&first, &last, &mut visit);
    }

    /// Flat indices of every non-sentinel cell, axis 0 varying fastest.
    pub fn real_indices(&self) -> Vec<Index> {
        let mut indices = Vec::with_capacity(self.real_cell_count());
        self.for_each_real_index(|index| indices.push(index));
        indices
    }
}
