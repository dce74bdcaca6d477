//! Tests for the water engine

use super::*;
use crate::test_utils::init_test_logging;
use pretty_assertions::assert_eq;

fn scan(heights: &[i64]) -> u64 {
    collect(&OccupancyGrid::build(heights).unwrap())
}

fn running_max(heights: &[i64]) -> u64 {
    collect_running_max(&HeightSequence::new(heights).unwrap()).unwrap()
}

/// Both strategies, asserted to agree.
fn water(heights: &[i64]) -> u64 {
    let by_scan = scan(heights);
    let by_max = running_max(heights);
    assert_eq!(by_scan, by_max, "strategies disagree on {heights:?}");
    by_scan
}

// ============================================================================
// Known basins
// ============================================================================

#[test]
fn test_known_basins() {
    init_test_logging();

    assert_eq!(water(&[4, 0, 2]), 2);
    assert_eq!(water(&[3, 0, 4]), 3);
    assert_eq!(water(&[4, 0, 0, 4]), 8);
    assert_eq!(water(&[4, 2, 1, 4]), 5);
    assert_eq!(water(&[1, 2, 0, 0]), 0);
    assert_eq!(water(&[3, 0, 3, 4, 2, 5]), 5);
}

#[test]
fn test_separate_basins_add_up() {
    // Two pools of 2 and 1 split by a column of height 3.
    assert_eq!(water(&[2, 0, 3, 1, 2]), 3);
}

#[test]
fn test_wall_need_not_be_adjacent() {
    // At elevation 1 the walls are columns 0 and 4, with dips in between.
    assert_eq!(water(&[2, 1, 0, 1, 2]), 4);
}

// ============================================================================
// Edges
// ============================================================================

#[test]
fn test_empty_and_single_column() {
    assert_eq!(water(&[]), 0);
    assert_eq!(water(&[0]), 0);
    assert_eq!(water(&[7]), 0);
}

#[test]
fn test_flat_skyline() {
    assert_eq!(water(&[3, 3, 3, 3]), 0);
    assert_eq!(water(&[0, 0, 0]), 0);
}

#[test]
fn test_monotonic_skylines() {
    assert_eq!(water(&[0, 1, 2, 3, 4]), 0);
    assert_eq!(water(&[5, 3, 3, 1, 0]), 0);
    assert_eq!(water(&[1, 1, 2, 2, 9]), 0);
}

#[test]
fn test_edge_columns_never_hold_water() {
    let grid = OccupancyGrid::build(&[0, 3, 0]).unwrap();
    for elevation in 0..grid.rows() {
        assert!(!contains_water(&grid, 0, elevation));
        assert!(!contains_water(&grid, 2, elevation));
    }
}

// ============================================================================
// Predicates
// ============================================================================

#[test]
fn test_wall_predicates() {
    let grid = OccupancyGrid::build(&[3, 0, 3, 4, 2, 5]).unwrap();

    assert!(has_solid_left(&grid, 1, 2));
    assert!(has_solid_right(&grid, 1, 2));
    assert!(contains_water(&grid, 1, 2));

    // Nothing left of column 0.
    assert!(!has_solid_left(&grid, 0, 0));
    // Only column 5 reaches elevation 4.
    assert!(!has_solid_right(&grid, 5, 4));
    assert!(!has_solid_left(&grid, 3, 4));
    assert!(has_solid_right(&grid, 4, 4));
}

#[test]
fn test_predicates_tolerate_out_of_range_columns() {
    let grid = OccupancyGrid::build(&[2, 0, 2]).unwrap();
    assert!(!has_solid_right(&grid, usize::MAX, 0));
    assert!(has_solid_left(&grid, usize::MAX, 0));
}

#[test]
fn test_running_maxima() {
    let heights = HeightSequence::from(vec![3, 0, 3, 4, 2, 5]);
    assert_eq!(left_maxima(&heights), vec![0, 3, 3, 3, 4, 4]);
    assert_eq!(right_maxima(&heights), vec![5, 5, 5, 5, 5, 0]);
    assert_eq!(water_levels(&heights), vec![0, 3, 0, 0, 2, 0]);
}

#[test]
fn test_running_maxima_empty() {
    let heights = HeightSequence::default();
    assert!(left_maxima(&heights).is_empty());
    assert!(right_maxima(&heights).is_empty());
    assert_eq!(collect_running_max(&heights), Some(0));
}

#[test]
fn test_collect_with_dispatches() {
    let heights = HeightSequence::new(&[4, 2, 1, 4]).unwrap();
    let grid = OccupancyGrid::from_heights(&heights, usize::MAX).unwrap();
    assert_eq!(collect_with(Strategy::Scan, &grid, &heights), 5);
    assert_eq!(collect_with(Strategy::RunningMax, &grid, &heights), 5);
}

#[test]
fn test_default_strategy_is_scan() {
    assert_eq!(Strategy::default(), Strategy::Scan);
}
