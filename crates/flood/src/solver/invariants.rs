//! Post-solve consistency checks, compiled into debug builds only.
//!
//! A failure here means the flood is no longer level-consistent, which is a
//! logic defect in a strategy rather than bad input, so it panics.

use crate::classify::CellClass;
use crate::height::Height;

use super::state::FloodFill;

pub(super) fn check_settled<H: Height>(flood: &FloodFill<'_, H>) {
    let grid = flood.grid;
    assert!(flood.water_borders.is_empty(), "water front left pending");

    grid.for_each_real_index(|index| {
        let depth = flood.depths[index];
        match flood.classes.get(index) {
            CellClass::Ground => {
                assert!(depth.level_cmp(&H::ZERO).is_eq(), "dry cell {index} has depth");
            }
            CellClass::Water => {
                assert!(depth > H::ZERO, "submerged cell {index} has no depth");
                let surface = flood.surfaces[index];
                assert!(
                    depth
                        .level_cmp(&grid.height_at(index).depth_below(surface))
                        .is_eq(),
                    "depth at {index} does not reach its surface"
                );
                grid.for_each_neighbor(index, |neighbor| match flood.classes.get(neighbor) {
                    CellClass::Ground => assert!(
                        surface <= grid.height_at(neighbor),
                        "water at {index} spills over ground {neighbor}"
                    ),
                    // one connected pool, one level
                    CellClass::Water => assert!(
                        surface.level_cmp(&flood.surfaces[neighbor]).is_eq(),
                        "water at {index} and {neighbor} stand at different levels"
                    ),
                    _ => {}
                });
            }
            class => panic!("real cell {index} left {class:?}"),
        }
    });
}
