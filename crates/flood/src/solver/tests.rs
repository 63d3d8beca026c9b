use super::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Solve with every strategy, check they agree, return the shared result.
fn solve_all<H: Height>(grid: &Grid<H>, level: H) -> FloodResult<H> {
    let reference = solve(grid, level);
    for strategy in Strategy::ALL {
        let other = solve_with(grid, level, strategy);
        assert_eq!(other, reference, "strategy {} disagrees", strategy.name());
    }
    reference
}

/// Depths of the real cells, axis 0 fastest.
fn real_depths<H: Height>(grid: &Grid<H>, result: &FloodResult<H>) -> Vec<H> {
    grid.real_indices()
        .into_iter()
        .map(|index| result.depth(index))
        .collect()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

#[test]
fn test_flat_zero_grid_under_level_fully_flooded() {
    let grid: Grid<i32> = Grid::new(vec![3, 3]);
    let result = solve_all(&grid, 1);
    assert_eq!(result.flooded_count, 9);
    assert_eq!(result.volume, 9);
    assert!(real_depths(&grid, &result).iter().all(|&d| d == 1));
}

#[test]
fn test_one_dimensional_pits() {
    let grid = Grid::from_real_heights(vec![5], &[3, 0, 2, 0, 1]).unwrap();
    let result = solve_all(&grid, 0);
    assert_eq!(real_depths(&grid, &result), vec![0, 2, 0, 1, 0]);
    assert_eq!(result.volume, 3_i64);
    assert_eq!(result.flooded_count, 2);
}

#[test]
fn test_flat_grid_above_level_stays_dry() {
    let grid = Grid::from_real_heights(vec![4, 4], &[5; 16]).unwrap();
    let result = solve_all(&grid, 2);
    assert_eq!(result.flooded_count, 0);
    assert_eq!(result.volume, 0_i64);
    assert_eq!(result.max_depth(), 0);
}

#[test]
fn test_height_equal_to_level_is_ground() {
    let grid = Grid::from_real_heights(vec![3], &[1, 1, 1]).unwrap();
    let result = solve_all(&grid, 1);
    assert_eq!(result.flooded_count, 0);
}

#[test]
fn test_enclosed_basin_fills_to_rim() {
    #[rustfmt::skip]
    let heights = [
        3, 3, 3, 3, 3,
        3, 0, 0, 0, 3,
        3, 0, 1, 0, 3,
        3, 3, 3, 3, 3,
    ];
    let grid = Grid::from_real_heights(vec![5, 4], &heights).unwrap();
    let result = solve_all(&grid, 0);
    #[rustfmt::skip]
    let expected = vec![
        0, 0, 0, 0, 0,
        0, 3, 3, 3, 0,
        0, 3, 2, 3, 0,
        0, 0, 0, 0, 0,
    ];
    assert_eq!(real_depths(&grid, &result), expected);
    assert_eq!(result.volume, 17_i64);
    assert_eq!(result.flooded_count, 6);
    assert_eq!(result.max_depth(), 3);
}

#[test]
fn test_basin_drains_to_lowest_spill_point() {
    #[rustfmt::skip]
    let heights = [
        5, 5, 5, 5, 5,
        5, 1, 1, 1, 5,
        5, 1, 1, 1, 2,
        5, 5, 5, 5, 5,
    ];
    let grid = Grid::from_real_heights(vec![5, 4], &heights).unwrap();
    let result = solve_all(&grid, 0);
    assert_eq!(result.flooded_count, 6);
    assert_eq!(result.volume, 6_i64);
    assert_eq!(result.depth_at(&grid, &[4, 2]), 0);
    assert_eq!(result.depth_at(&grid, &[2, 1]), 1);
}

#[test]
fn test_outside_water_and_walled_pool() {
    #[rustfmt::skip]
    let heights = [
        1, 1, 1, 1, 1,
        1, 4, 4, 4, 1,
        1, 4, 0, 4, 1,
        1, 4, 4, 4, 1,
        1, 1, 1, 1, 1,
    ];
    let grid = Grid::from_real_heights(vec![5, 5], &heights).unwrap();
    let result = solve_all(&grid, 2);
    assert_eq!(result.depth_at(&grid, &[0, 0]), 1);
    assert_eq!(result.depth_at(&grid, &[1, 1]), 0);
    assert_eq!(result.depth_at(&grid, &[2, 2]), 4);
    assert_eq!(result.flooded_count, 17);
    assert_eq!(result.volume, 20_i64);
}

#[test]
fn test_level_above_everything_floods_all() {
    let heights = [1, 2, 3, 4, 5, 6];
    let grid = Grid::from_real_heights(vec![3, 2], &heights).unwrap();
    let result = solve_all(&grid, 10);
    assert_eq!(real_depths(&grid, &result), vec![9, 8, 7, 6, 5, 4]);
    assert_eq!(result.volume, 39_i64);
    assert_eq!(result.flooded_count, 6);
}

#[test]
fn test_single_cell_grid() {
    let grid: Grid<i32> = Grid::new(vec![1]);
    let result = solve_all(&grid, 1);
    assert_eq!(real_depths(&grid, &result), vec![1]);

    let dry = solve_all(&grid, 0);
    assert_eq!(dry.flooded_count, 0);
}

#[test]
fn test_three_dimensional_cavity() {
    let mut heights = [5i64; 27];
    heights[13] = 0;
    let grid = Grid::from_real_heights(vec![3, 3, 3], &heights).unwrap();
    let result = solve_all(&grid, 0);
    assert_eq!(result.depth_at(&grid, &[1, 1, 1]), 5);
    assert_eq!(result.flooded_count, 1);
    assert_eq!(result.volume, 5);
}

#[test]
fn test_integer_volume_exceeds_height_type() {
    let grid: Grid<i32> = Grid::new(vec![100, 100]);
    let result = solve_all(&grid, 300_000);
    assert_eq!(result.flooded_count, 10_000);
    assert_eq!(result.volume, 3_000_000_000i64);

    let small: Grid<i16> = Grid::new(vec![3, 3]);
    assert_eq!(solve_all(&small, 4000).volume, 36_000i64);
}

#[test]
fn test_extreme_integer_depth_saturates() {
    let grid = Grid::from_real_heights(vec![1], &[i32::MIN]).unwrap();
    let result = solve_all(&grid, 1);
    assert_eq!(result.depth_at(&grid, &[0]), i32::MAX);
    assert_eq!(result.volume, i64::from(i32::MAX));
}

#[test]
fn test_float_heights() {
    let grid = Grid::from_real_heights(vec![3], &[2.0f32, 0.5, 1.5]).unwrap();
    let result = solve_all(&grid, 0.0);
    assert_eq!(real_depths(&grid, &result), vec![0.0, 1.0, 0.0]);
    assert_eq!(result.volume, 1.0);
}

#[test]
fn test_negative_heights_and_level() {
    let grid = Grid::from_real_heights(vec![4], &[-1i16, -5, -3, -2]).unwrap();
    let result = solve_all(&grid, -4);
    // the rim at -1 and -2 holds water up to -2 inside
    assert_eq!(real_depths(&grid, &result), vec![0, 3, 1, 0]);
}

// ---------------------------------------------------------------------------
// Degenerate inputs
// ---------------------------------------------------------------------------

#[test]
fn test_empty_axis_returns_dry() {
    let grid: Grid<i32> = Grid::new(vec![0, 4]);
    let result = solve_all(&grid, 3);
    assert_eq!(result.depths.len(), grid.cell_count());
    assert_eq!(result.flooded_count, 0);
}

#[test]
fn test_zero_dimensional_grid_returns_dry() {
    let grid: Grid<i32> = Grid::new(Vec::<usize>::new());
    let result = solve_all(&grid, 3);
    assert!(result.depths.is_empty());
    assert_eq!(result.volume, 0);
}

// ---------------------------------------------------------------------------
// Result properties
// ---------------------------------------------------------------------------

#[test]
fn test_sentinels_and_ground_have_zero_depth() {
    #[rustfmt::skip]
    let heights = [
        4, 4, 4, 4,
        4, 1, 2, 4,
        4, 0, 6, 4,
        4, 4, 4, 4,
    ];
    let grid = Grid::from_real_heights(vec![4, 4], &heights).unwrap();
    let result = solve_all(&grid, 0);
    for index in 0..grid.cell_count() {
        if grid.is_border(index) || !result.is_flooded(index) {
            assert_eq!(result.depth(index), 0, "cell {index}");
        }
    }
    assert_eq!(result.depth_at(&grid, &[2, 2]), 0);
    assert_eq!(result.depth_at(&grid, &[1, 2]), 4);
}

#[test]
fn test_solve_is_deterministic() {
    #[rustfmt::skip]
    let heights = [
        7, 2, 9, 4, 6,
        3, 8, 1, 5, 2,
        6, 0, 4, 7, 3,
        9, 5, 2, 8, 1,
    ];
    let grid = Grid::from_real_heights(vec![5, 4], &heights).unwrap();
    let first = solve(&grid, 1);
    let second = solve(&grid, 1);
    assert_eq!(first, second);
    let volume: i64 = first.depths.iter().map(|&d| i64::from(d)).sum();
    assert_eq!(volume, first.volume);
    let flooded = first.depths.iter().filter(|&&d| d > 0).count();
    assert_eq!(flooded, first.flooded_count);
}

#[test]
fn test_strategy_names_and_default() {
    assert_eq!(Strategy::default(), Strategy::RangeBucket);
    let names: Vec<_> = Strategy::ALL.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["rescan", "height_map", "range_bucket"]);
}
