//! Height-map bucketed priority flood.
//!
//! Active ground borders are copied into a sorted map from height to index
//! list. Each round drains exactly one bucket, which then becomes the whole
//! of `ground_borders`. Kept for benchmarking against the range strategy.

use std::collections::BTreeMap;

use crate::grid::Index;
use crate::height::{Height, Level};

use super::state::FloodFill;

pub(super) fn run<H: Height>(flood: &mut FloodFill<'_, H>) {
    let grid = flood.grid;
    let mut buckets: BTreeMap<Level<H>, Vec<Index>> = BTreeMap::new();
    let mut settled = 0;

    while !flood.ground_borders.is_empty() || !flood.water_borders.is_empty() {
        flood.expand_water();
        flood.expand_ground(settled);

        for &index in &flood.ground_borders[settled..] {
            if flood.classes.has_unknown_neighbor(grid, index) {
                buckets
                    .entry(Level(grid.height_at(index)))
                    .or_default()
                    .push(index);
            }
        }
        flood.ground_borders.clear();

        if let Some((Level(level), spill)) = buckets.pop_first() {
            flood.level = level;
            for &index in &spill {
                flood.flood_around(index);
            }
            flood.ground_borders = spill;
        }

        settled = flood.ground_borders.len();
    }

    debug_assert!(buckets.is_empty(), "height buckets left undrained");
}
