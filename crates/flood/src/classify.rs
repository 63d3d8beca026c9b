//! Per-cell flood-fill progress tags.

use serde::{Deserialize, Serialize};

use crate::grid::{Grid, Index};
use crate::height::Height;

/// Classification of one cell during a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellClass {
    /// Not yet reached by the flood.
    #[default]
    Unknown,
    /// Dry: stays above the water that can reach it.
    Ground,
    /// Submerged at the level it was flooded at.
    Water,
    /// Sentinel padding, never processed.
    Invalid,
}

/// Classification buffer covering a grid's full padded storage.
#[derive(Debug, Clone)]
pub struct CellClasses {
    cells: Vec<CellClass>,
}

impl CellClasses {
    /// Every cell Unknown except the sentinel layer, which is Invalid.
    pub fn for_grid<H: Height>(grid: &Grid<H>) -> Self {
        let mut cells = vec![CellClass::Unknown; grid.cell_count()];
        grid.for_each_border_index(0, |index| cells[index] = CellClass::Invalid);
        Self { cells }
    }

    #[inline]
    pub fn get(&self, index: Index) -> CellClass {
        self.cells[index]
    }

    #[inline]
    pub fn set(&mut self, index: Index, class: CellClass) {
        self.cells[index] = class;
    }

    #[inline]
    pub fn is_unknown(&self, index: Index) -> bool {
        self.cells[index] == CellClass::Unknown
    }

    /// True while a real cell still borders unresolved territory.
    #[inline]
    pub fn has_unknown_neighbor<H: Height>(&self, grid: &Grid<H>, index: Index) -> bool {
        grid.any_neighbor(index, |n| self.is_unknown(n))
    }

    pub fn as_slice(&self) -> &[CellClass] {
        &self.cells
    }

    /// Count of cells carrying `class`.
    pub fn count(&self, class: CellClass) -> usize {
        self.cells.iter().filter(|&&c| c == class).count()
    }
}
