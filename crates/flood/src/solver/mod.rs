//! Priority-flood solver.
//!
//! Given a grid and the water level in contact with its outside, every real
//! cell ends either Ground (dry) or Water (submerged to the level of the
//! lowest spill point of its basin). The solve:
//!   1. Marks the sentinel layer Invalid and classifies the outermost real
//!      layer against the initial level.
//!   2. Alternates breadth-first propagation (water at the current level,
//!      ground uphill from ground) with draining the lowest pending ground
//!      border height, which becomes the new level.
//!   3. Stops once no water front is pending and every ground border is
//!      settled.
//!
//! Three strategies choose the next level differently and must agree on every
//! input. [`Strategy::RangeBucket`] is the one [`solve`] uses.

mod height_map;
#[cfg(debug_assertions)]
mod invariants;
mod range_bucket;
mod rescan;
pub mod result;
mod state;

#[cfg(test)]
mod tests;

use bevy::log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::height::Height;

pub use result::FloodResult;
use state::FloodFill;

/// How the solver finds the next spill level.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    bitcode::Encode,
    bitcode::Decode,
)]
pub enum Strategy {
    /// Re-filter every ground border each round for the minimum height.
    Rescan,
    /// Copy active borders into a height-keyed map of index lists.
    HeightMap,
    /// Sort only new border tails and keep ranges into one array.
    #[default]
    RangeBucket,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Rescan, Strategy::HeightMap, Strategy::RangeBucket];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Rescan => "rescan",
            Strategy::HeightMap => "height_map",
            Strategy::RangeBucket => "range_bucket",
        }
    }
}

/// Flood `grid` from a water level touching every border cell.
pub fn solve<H: Height>(grid: &Grid<H>, water_level: H) -> FloodResult<H> {
    solve_with(grid, water_level, Strategy::RangeBucket)
}

/// [`solve`] with an explicit strategy.
///
/// A grid with no real cells yields a dry result sized to its storage.
pub fn solve_with<H: Height>(grid: &Grid<H>, water_level: H, strategy: Strategy) -> FloodResult<H> {
    if grid.is_degenerate() {
        warn!(
            "Flood solve skipped: grid {:?} has no real cells",
            grid.sizes()
        );
        return FloodResult::dry(grid.cell_count());
    }

    let mut flood = FloodFill::new(grid, water_level);
    flood.seed();

    match strategy {
        Strategy::Rescan => rescan::run(&mut flood),
        Strategy::HeightMap => height_map::run(&mut flood),
        Strategy::RangeBucket => range_bucket::run(&mut flood),
    }

    let result = flood.finish();
    debug!(
        "Flood solve ({}): {} of {} cells flooded, volume {:?}",
        strategy.name(),
        result.flooded_count,
        grid.real_cell_count(),
        result.volume
    );
    result
}
