//! Mutable state shared by every flood strategy.
//!
//! A [`FloodFill`] owns the classification buffer, the depth accumulator and
//! both frontier sequences for exactly one solve. Strategies differ only in
//! how they pick the next water level; seeding, breadth-first propagation and
//! flooding around a spill cell live here.

use crate::classify::{CellClass, CellClasses};
use crate::grid::{Grid, Index};
use crate::height::Height;

use super::result::FloodResult;

pub(crate) struct FloodFill<'g, H: Height> {
    pub grid: &'g Grid<H>,
    pub classes: CellClasses,
    pub depths: Vec<H>,
    pub volume: H::Volume,
    pub flooded: usize,
    /// Level currently in contact with the flood front.
    pub level: H,
    /// Ground cells that still touched Unknown cells when they were added.
    pub ground_borders: Vec<Index>,
    /// Water cells whose neighbors have not been propagated yet.
    pub water_borders: Vec<Index>,
    /// Level each water cell was flooded at.
    #[cfg(debug_assertions)]
    pub surfaces: Vec<H>,
}

impl<'g, H: Height> FloodFill<'g, H> {
    pub fn new(grid: &'g Grid<H>, water_level: H) -> Self {
        Self {
            grid,
            classes: CellClasses::for_grid(grid),
            depths: vec![H::ZERO; grid.cell_count()],
            volume: H::Volume::default(),
            flooded: 0,
            level: water_level,
            ground_borders: Vec::new(),
            water_borders: Vec::new(),
            #[cfg(debug_assertions)]
            surfaces: vec![H::ZERO; grid.cell_count()],
        }
    }

    /// Classify the outermost real layer against the initial water level.
    pub fn seed(&mut self) {
        let grid = self.grid;
        grid.for_each_border_index(1, |index| {
            if grid.height_at(index) < self.level {
                self.mark_water(index);
                self.water_borders.push(index);
            } else {
                self.mark_ground(index);
                self.ground_borders.push(index);
            }
        });
    }

    fn mark_water(&mut self, index: Index) {
        let ground = self.grid.height_at(index);
        debug_assert!(self.classes.is_unknown(index), "re-flooding cell {index}");
        debug_assert!(ground < self.level, "flooding cell {index} from below");

        let depth = ground.depth_below(self.level);
        self.classes.set(index, CellClass::Water);
        self.depths[index] = depth;
        self.volume = H::accumulate(self.volume, depth);
        self.flooded += 1;
        #[cfg(debug_assertions)]
        {
            self.surfaces[index] = self.level;
        }
    }

    fn mark_ground(&mut self, index: Index) {
        self.classes.set(index, CellClass::Ground);
    }

    /// Propagate the current level outward from every pending water cell.
    ///
    /// Unknown neighbors below the level join the water front, the rest
    /// become ground borders. Leaves `water_borders` empty.
    pub fn expand_water(&mut self) {
        let grid = self.grid;
        let mut frontier = std::mem::take(&mut self.water_borders);
        grid.breadth_first_expand(&mut frontier, 0, false, |frontier, origin, index| {
            debug_assert!(
                self.classes.get(index) != CellClass::Ground
                    || grid.height_at(origin) < grid.height_at(index),
                "water cell {origin} sits against lower ground {index}"
            );
            if !self.classes.is_unknown(index) {
                return;
            }
            if grid.height_at(index) < self.level {
                self.mark_water(index);
                frontier.push(index);
            } else {
                self.mark_ground(index);
                self.ground_borders.push(index);
            }
        });
        frontier.clear();
        self.water_borders = frontier;
    }

    /// Climb from ground borders added at or after `start`: an Unknown
    /// neighbor at least as high as its ground origin is ground too.
    pub fn expand_ground(&mut self, start: usize) {
        let grid = self.grid;
        let mut frontier = std::mem::take(&mut self.ground_borders);
        grid.breadth_first_expand(&mut frontier, start, false, |frontier, origin, index| {
            debug_assert!(
                !(self.classes.get(index) == CellClass::Water
                    && grid.height_at(index) > grid.height_at(origin)),
                "ground cell {origin} sits below water cell {index}"
            );
            if self.classes.is_unknown(index) && grid.height_at(index) >= grid.height_at(origin) {
                self.mark_ground(index);
                frontier.push(index);
            }
        });
        self.ground_borders = frontier;
    }

    /// Drop ground borders at or after `start` that no longer touch Unknown
    /// cells. Order of the survivors is kept.
    pub fn settle_tail(&mut self, start: usize) {
        let grid = self.grid;
        let mut keep = start;
        for j in start..self.ground_borders.len() {
            let index = self.ground_borders[j];
            if self.classes.has_unknown_neighbor(grid, index) {
                self.ground_borders[keep] = index;
                keep += 1;
            }
        }
        self.ground_borders.truncate(keep);
    }

    /// Flood every Unknown neighbor of a spill cell at the current level.
    pub fn flood_around(&mut self, index: Index) {
        let grid = self.grid;
        grid.for_each_neighbor(index, |neighbor| {
            if self.classes.is_unknown(neighbor) {
                self.mark_water(neighbor);
                self.water_borders.push(neighbor);
            }
        });
    }

    pub fn finish(self) -> FloodResult<H> {
        #[cfg(debug_assertions)]
        super::invariants::check_settled(&self);

        FloodResult {
            depths: self.depths,
            volume: self.volume,
            flooded_count: self.flooded,
        }
    }
}
