//! Rescanning priority flood.
//!
//! Every round filters all ground borders and takes the lowest active height
//! as the next level. Simplest of the strategies and quadratic in the number
//! of basins; kept as a reference for the bucketed ones.

use std::cmp::Ordering;

use crate::height::Height;

use super::state::FloodFill;

pub(super) fn run<H: Height>(flood: &mut FloodFill<'_, H>) {
    let grid = flood.grid;
    let mut settled = 0;

    while !flood.ground_borders.is_empty() || !flood.water_borders.is_empty() {
        flood.expand_water();
        flood.expand_ground(settled);

        let mut lowest: Option<H> = None;
        let classes = &flood.classes;
        flood.ground_borders.retain(|&index| {
            if !classes.has_unknown_neighbor(grid, index) {
                return false;
            }
            let height = grid.height_at(index);
            if lowest.map_or(true, |low| height.level_cmp(&low) == Ordering::Less) {
                lowest = Some(height);
            }
            true
        });
        settled = flood.ground_borders.len();

        let Some(level) = lowest else {
            continue;
        };
        flood.level = level;
        for j in 0..flood.ground_borders.len() {
            let index = flood.ground_borders[j];
            if grid.height_at(index).level_cmp(&level) == Ordering::Equal {
                flood.flood_around(index);
            }
        }
    }
}
