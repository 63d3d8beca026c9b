//! Range-bucketed priority flood (production strategy).
//!
//! Each round's new ground borders form a tail of `ground_borders`. The tail
//! is sorted once by height and registered as a single `start..end` range
//! keyed by its lowest height. Draining a bucket consumes the leading run at
//! the bucket's height and re-keys the remainder, so no border cell is ever
//! copied or re-sorted.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::Range;

use crate::height::{Height, Level};

use super::state::FloodFill;

type Buckets<H> = BTreeMap<Level<H>, Vec<Range<usize>>>;

fn push_range<H: Height>(buckets: &mut Buckets<H>, key: H, range: Range<usize>) {
    buckets.entry(Level(key)).or_default().push(range);
}

/// Remove one range from the lowest bucket. Buckets never hold empty lists.
fn pop_lowest<H: Height>(buckets: &mut Buckets<H>) -> Option<(H, Range<usize>)> {
    let mut entry = buckets.first_entry()?;
    let key = entry.key().0;
    let range = entry.get_mut().pop();
    if entry.get().is_empty() {
        entry.remove();
    }
    range.map(|range| (key, range))
}

pub(super) fn run<H: Height>(flood: &mut FloodFill<'_, H>) {
    let grid = flood.grid;
    let mut buckets: Buckets<H> = BTreeMap::new();
    let mut settled = 0;

    while settled < flood.ground_borders.len() || !flood.water_borders.is_empty() {
        flood.expand_water();
        flood.expand_ground(settled);
        flood.settle_tail(settled);

        let end = flood.ground_borders.len();
        if settled < end {
            flood.ground_borders[settled..end]
                .sort_by(|&a, &b| grid.height_at(a).level_cmp(&grid.height_at(b)));
            let lowest = grid.height_at(flood.ground_borders[settled]);
            push_range(&mut buckets, lowest, settled..end);
        }

        while flood.water_borders.is_empty() {
            let Some((level, first)) = pop_lowest(&mut buckets) else {
                break;
            };
            flood.level = level;

            let mut next = Some(first);
            while let Some(mut range) = next {
                while range.start < range.end {
                    let index = flood.ground_borders[range.start];
                    if grid.height_at(index).level_cmp(&level) != Ordering::Equal {
                        break;
                    }
                    flood.flood_around(index);
                    range.start += 1;
                }

                if range.start < range.end {
                    let rest = grid.height_at(flood.ground_borders[range.start]);
                    debug_assert_eq!(rest.level_cmp(&level), Ordering::Greater);
                    push_range(&mut buckets, rest, range);
                }

                // ties at this level drain before control returns to propagation
                next = match buckets.first_key_value() {
                    Some((key, _)) if key.0.level_cmp(&level) == Ordering::Equal => {
                        pop_lowest(&mut buckets).map(|(_, range)| range)
                    }
                    _ => None,
                };
            }
        }

        settled = flood.ground_borders.len();
    }

    debug_assert!(buckets.is_empty(), "height buckets left undrained");
}
