//! Tests for the grid builder

use super::*;
use pretty_assertions::assert_eq;

fn solid_map(grid: &OccupancyGrid) -> Vec<Vec<bool>> {
    (0..grid.rows()).map(|r| grid.row(r).to_vec()).collect()
}

#[test]
fn test_dimensions_follow_tallest_column() {
    let grid = OccupancyGrid::build(&[4, 0, 2]).unwrap();
    assert_eq!(grid.columns(), 3);
    assert_eq!(grid.rows(), 4);
    assert_eq!(grid.cell_count(), 12);
}

#[test]
fn test_cells_solid_below_column_height() {
    let grid = OccupancyGrid::build(&[4, 0, 2]).unwrap();

    // Ground row first.
    assert_eq!(
        solid_map(&grid),
        vec![
            vec![true, false, true],
            vec![true, false, true],
            vec![true, false, false],
            vec![true, false, false],
        ]
    );
}

#[test]
fn test_short_columns_are_empty_above_their_height() {
    let grid = OccupancyGrid::build(&[1, 3]).unwrap();
    assert!(grid.is_solid(0, 0));
    assert!(!grid.is_solid(0, 1));
    assert!(!grid.is_solid(0, 2));
    assert!(grid.is_solid(1, 2));
}

#[test]
fn test_empty_input_has_no_rows() {
    let grid = OccupancyGrid::build(&[]).unwrap();
    assert_eq!(grid.columns(), 0);
    assert_eq!(grid.rows(), 0);
    assert_eq!(grid.cell_count(), 0);
}

#[test]
fn test_all_zero_input_has_no_rows() {
    let grid = OccupancyGrid::build(&[0, 0, 0]).unwrap();
    assert_eq!(grid.columns(), 3);
    assert_eq!(grid.rows(), 0);
}

#[test]
fn test_out_of_range_cells_are_empty() {
    let grid = OccupancyGrid::build(&[2, 2]).unwrap();
    assert!(!grid.is_solid(2, 0));
    assert!(!grid.is_solid(0, 2));
}

#[test]
fn test_column_height_round_trips() {
    let heights = [3, 0, 3, 4, 2, 5];
    let grid = OccupancyGrid::build(&heights).unwrap();
    let recovered: Vec<i64> = (0..grid.columns())
        .map(|c| grid.column_height(c) as i64)
        .collect();
    assert_eq!(recovered, heights);
}

#[test]
fn test_build_is_deterministic() {
    let a = OccupancyGrid::build(&[4, 2, 1, 4]).unwrap();
    let b = OccupancyGrid::build(&[4, 2, 1, 4]).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_negative_height_rejected() {
    let err = OccupancyGrid::build(&[4, -2, 2]).unwrap_err();
    assert_eq!(
        err,
        InputError::NegativeHeight {
            column: 1,
            height: -2
        }
    );
}

#[test]
fn test_cell_limit_enforced() {
    let err = OccupancyGrid::build_with_limit(&[10, 0, 10], 29).unwrap_err();
    assert_eq!(
        err,
        InputError::GridTooLarge {
            columns: 3,
            rows: 10,
            limit: 29
        }
    );

    let grid = OccupancyGrid::build_with_limit(&[10, 0, 10], 30).unwrap();
    assert_eq!(grid.cell_count(), 30);
}

#[test]
fn test_huge_height_does_not_allocate() {
    let err = OccupancyGrid::build(&[i64::MAX, 0, 1]).unwrap_err();
    assert!(matches!(err, InputError::GridTooLarge { columns: 3, .. }));
}
