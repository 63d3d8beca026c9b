//! N-dimensional height lattice with a sentinel padding layer.
//!
//! Every axis is stored two cells wider than the caller asked for: one
//! sentinel cell before logical coordinate 0 and one after the last logical
//! coordinate. Real cells therefore always have all `2 * D` neighbors present
//! in flat storage, and neighbor enumeration is a pair of stride offsets per
//! axis with no bounds checks.
//!
//! Linear index layout: axis 0 is contiguous (`stride[0] == 1`) and
//! `stride[i] == stride[i - 1] * padded_size[i - 1]`.

pub mod border;
pub mod traversal;


use crate::error::GridError;
use crate::height::Height;

/// Linear index into a grid's flat (padded) storage.
pub type Index = usize;

/// Height lattice of arbitrary dimensionality.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<H> {
    /// Padded extent per axis (logical size + 2).
    sizes: Vec<usize>,
    /// Linear-index delta for one step along each axis.
    strides: Vec<usize>,
    heights: Vec<H>,
}

/// Padded sizes, strides and flat length for the given logical sizes.
fn layout(logical: &[usize]) -> Result<(Vec<usize>, Vec<usize>, usize), GridError> {
    let overflow = || GridError::SizeOverflow {
        sizes: logical.to_vec(),
    };
    let sizes = logical
        .iter()
        .map(|&s| s.checked_add(2))
        .collect::<Option<Vec<usize>>>()
        .ok_or_else(overflow)?;
    let mut strides = Vec::with_capacity(sizes.len());
    let mut len = usize::from(!sizes.is_empty());
    for &size in &sizes {
        strides.push(len);
        len = len.checked_mul(size).ok_or_else(overflow)?;
    }
    Ok((sizes, strides, len))
}

impl<H: Height> Grid<H> {
    /// Build a zero-height grid with the given caller-visible sizes.
    ///
    /// Each axis is widened by 2 internally (padded size = logical size + 2);
    /// the extra cells are sentinels that are never flooded.
    ///
    /// # Panics
    ///
    /// If the padded cell count overflows `usize`. Use
    /// [`Grid::from_real_heights`] for untrusted sizes.
    pub fn new(sizes: impl Into<Vec<usize>>) -> Self {
        let (sizes, strides, len) = match layout(&sizes.into()) {
            Ok(layout) => layout,
            Err(err) => panic!("{err}"),
        };
        Self {
            sizes,
            strides,
            heights: vec![H::ZERO; len],
        }
    }

    /// Build a grid from a full padded height buffer.
    ///
    /// `heights` must hold exactly [`Grid::cell_count`] valid values for
    /// these sizes, sentinels included.
    pub fn with_heights(sizes: impl Into<Vec<usize>>, heights: Vec<H>) -> Result<Self, GridError> {
        let (sizes, strides, len) = layout(&sizes.into())?;
        if heights.len() != len {
            return Err(GridError::ShapeMismatch {
                expected: len,
                actual: heights.len(),
            });
        }
        if let Some(index) = heights.iter().position(|h| !h.is_valid()) {
            return Err(GridError::InvalidHeight { index });
        }
        Ok(Self {
            sizes,
            strides,
            heights,
        })
    }

    /// Build a grid from real-cell heights only, listed with axis 0 varying
    /// fastest. Sentinel cells are set to zero.
    pub fn from_real_heights(sizes: impl Into<Vec<usize>>, real: &[H]) -> Result<Self, GridError> {
        let logical = sizes.into();
        let (sizes, strides, len) = layout(&logical)?;
        // bounded by the padded length, so no overflow
        let expected: usize = if logical.is_empty() {
            0
        } else {
            logical.iter().product()
        };
        if real.len() != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                actual: real.len(),
            });
        }
        let mut grid = Self {
            sizes,
            strides,
            heights: vec![H::ZERO; len],
        };
        for (index, &h) in grid.real_indices().into_iter().zip(real) {
            if !h.is_valid() {
                return Err(GridError::InvalidHeight { index });
            }
            grid.heights[index] = h;
        }
        Ok(grid)
    }

    // -----------------------------------------------------------------------
    // Shape
    // -----------------------------------------------------------------------

    /// Number of axes.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.sizes.len()
    }

    /// Caller-visible extent of `axis`.
    #[inline]
    pub fn size(&self, axis: usize) -> usize {
        self.sizes[axis] - 2
    }

    /// Caller-visible extents of every axis.
    pub fn sizes(&self) -> Vec<usize> {
        self.sizes.iter().map(|&s| s - 2).collect()
    }

    /// Stored extent of `axis`, sentinels included.
    #[inline]
    pub fn padded_size(&self, axis: usize) -> usize {
        self.sizes[axis]
    }

    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Length of flat storage, sentinels included.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.heights.len()
    }

    /// Number of non-sentinel cells.
    pub fn real_cell_count(&self) -> usize {
        if self.is_degenerate() {
            0
        } else {
            self.sizes.iter().map(|&s| s - 2).product()
        }
    }

    /// True when the grid has no real cells (no axes, or an empty axis).
    pub fn is_degenerate(&self) -> bool {
        self.sizes.is_empty() || self.sizes.iter().any(|&s| s < 3)
    }

    // -----------------------------------------------------------------------
    // Addressing
    // -----------------------------------------------------------------------

    /// Flat index of a logical coordinate. Logical 0 maps to padded 1.
    #[inline]
    pub fn index_of(&self, coords: &[usize]) -> Index {
        debug_assert_eq!(coords.len(), self.strides.len(), "coordinate arity");
        coords
            .iter()
            .zip(&self.strides)
            .map(|(&c, &stride)| stride * (c + 1))
            .sum()
    }

    /// True if `coords` names a real cell of this grid.
    pub fn contains(&self, coords: &[usize]) -> bool {
        coords.len() == self.sizes.len()
            && coords.iter().zip(&self.sizes).all(|(&c, &s)| c < s - 2)
    }

    /// Position of `index` along `axis` in padded coordinates.
    #[inline]
    pub fn sub_index(&self, index: Index, axis: usize) -> usize {
        (index / self.strides[axis]) % self.sizes[axis]
    }

    /// Logical coordinates of `index`, or `None` for a sentinel cell.
    pub fn coords_of(&self, index: Index) -> Option<Vec<usize>> {
        if self.is_border(index) {
            return None;
        }
        Some(
            (0..self.sizes.len())
                .map(|axis| self.sub_index(index, axis) - 1)
                .collect(),
        )
    }

    /// True if `index` lies on the first or last padded position of any axis,
    /// i.e. it is a sentinel.
    pub fn is_border(&self, index: Index) -> bool {
        (0..self.sizes.len()).any(|axis| {
            let sub = self.sub_index(index, axis);
            sub == 0 || sub + 1 == self.sizes[axis]
        })
    }

    // -----------------------------------------------------------------------
    // Heights
    // -----------------------------------------------------------------------

    #[inline]
    pub fn height(&self, coords: &[usize]) -> H {
        self.heights[self.index_of(coords)]
    }

    #[inline]
    pub fn height_mut(&mut self, coords: &[usize]) -> &mut H {
        let index = self.index_of(coords);
        &mut self.heights[index]
    }

    #[inline]
    pub fn height_at(&self, index: Index) -> H {
        self.heights[index]
    }

    #[inline]
    pub fn height_at_mut(&mut self, index: Index) -> &mut H {
        &mut self.heights[index]
    }

    /// Flat height storage, sentinels included.
    #[inline]
    pub fn heights(&self) -> &[H] {
        &self.heights
    }

    // -----------------------------------------------------------------------
    // Neighbors
    // -----------------------------------------------------------------------

    /// Visit the `2 * D` axis neighbors of a real cell.
    ///
    /// No bounds checks: the sentinel layer guarantees both neighbors exist.
    #[inline]
    pub fn for_each_neighbor(&self, index: Index, mut visit: impl FnMut(Index)) {
        debug_assert!(!self.is_border(index), "neighbors of sentinel {index}");
        for &stride in &self.strides {
            visit(index - stride);
            visit(index + stride);
        }
    }

    /// True if any axis neighbor of a real cell satisfies `pred`.
    #[inline]
    pub fn any_neighbor(&self, index: Index, mut pred: impl FnMut(Index) -> bool) -> bool {
        debug_assert!(!self.is_border(index), "neighbors of sentinel {index}");
        self.strides
            .iter()
            .any(|&stride| pred(index - stride) || pred(index + stride))
    }
}
