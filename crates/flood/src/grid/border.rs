//! Boundary-ring enumeration.
//!
//! A ring at depth `offset` is every cell whose padded coordinate equals
//! `offset` or `size - 1 - offset` on at least one axis, restricted to the box
//! `[offset, size - 1 - offset]` on all axes. Offset 0 is the sentinel layer,
//! offset 1 the outermost real layer.

use super::{Grid, Index};
use crate::height::Height;

impl<H: Height> Grid<H> {
    /// Visit every cell of the ring at depth `offset` exactly once.
    ///
    /// Sweeps the low and high hyperplane of each axis in turn. Axes already
    /// swept range over their full extent, later axes only over their
    /// interior, so corner cells are not repeated. A grid too thin to have an
    /// interior at this depth is enumerated as one box.
    pub fn for_each_border_index(&self, offset: usize, mut visit: impl FnMut(Index)) {
        let dims = self.sizes.len();
        if dims == 0 || self.sizes.iter().any(|&s| s < 2 * offset + 1) {
            return;
        }

        if self.sizes.iter().any(|&s| s < 3 + 2 * offset) {
            let first = vec![offset; dims];
            let last: Vec<usize> = self.sizes.iter().map(|&s| s - offset - 1).collect();
            self.for_each_in_box(&first, &last, &mut visit);
            return;
        }

        let mut first = vec![offset + 1; dims];
        let mut last: Vec<usize> = self.sizes.iter().map(|&s| s - offset - 2).collect();

        for axis in 0..dims {
            let high = last[axis] + 1;

            first[axis] = high;
            last[axis] = high;
            self.for_each_in_box(&first, &last, &mut visit);

            first[axis] = offset;
            last[axis] = offset;
            self.for_each_in_box(&first, &last, &mut visit);

            last[axis] = high;
        }
    }

    /// Visit every cell in the inclusive padded-coordinate box
    /// `first..=last`, axis 0 varying fastest.
    pub(crate) fn for_each_in_box(
        &self,
        first: &[usize],
        last: &[usize],
        visit: &mut impl FnMut(Index),
    ) {
        debug_assert!(first.iter().zip(last).all(|(f, l)| f <= l));

        let mut cursor = first.to_vec();
        let mut index: Index = first
            .iter()
            .zip(&self.strides)
            .map(|(&c, &stride)| c * stride)
            .sum();

        loop {
            visit(index);

            let mut axis = 0;
            loop {
                if axis == cursor.len() {
                    return;
                }
                if cursor[axis] == last[axis] {
                    index -= (last[axis] - first[axis]) * self.strides[axis];
                    cursor[axis] = first[axis];
                    axis += 1;
                } else {
                    cursor[axis] += 1;
                    index += self.strides[axis];
                    break;
                }
            }
        }
    }
}
