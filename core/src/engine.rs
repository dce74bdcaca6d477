//! The water engine.
//!
//! An empty cell holds one unit of water when some cell at the same elevation
//! to its left is solid and some cell at the same elevation to its right is
//! solid. Each elevation is judged on its own; there is no spill-over between
//! rows.
//!
//! Two formulations are provided and always agree:
//!
//! - [`collect`] scans the occupancy grid cell by cell, looking for a wall
//!   anywhere on each side. `O(columns² × rows)`.
//! - [`collect_running_max`] works on the heights directly, using the tallest
//!   column seen from the left and from the right. `O(columns)` and never
//!   materializes the grid.

use crate::grid::OccupancyGrid;
use crate::heights::HeightSequence;

/// Which formulation of the engine to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Cell-by-cell wall scans over the occupancy grid.
    #[default]
    Scan,
    /// Prefix/suffix maxima over the heights.
    RunningMax,
}

/// Counts the trapped units of water in a grid.
///
/// Always in `0..=grid.cell_count()`.
pub fn collect(grid: &OccupancyGrid) -> u64 {
    let mut total: u64 = 0;
    for elevation in 0..grid.rows() {
        for column in 0..grid.columns() {
            if !grid.is_solid(column, elevation) && contains_water(grid, column, elevation) {
                total += 1;
            }
        }
    }
    tracing::debug!(
        columns = grid.columns(),
        rows = grid.rows(),
        total,
        "Collected water by scanning"
    );
    total
}

/// Whether a cell is walled in on both sides at its elevation.
///
/// Says nothing about the cell itself; callers check that it is empty.
pub fn contains_water(grid: &OccupancyGrid, column: usize, elevation: usize) -> bool {
    has_solid_left(grid, column, elevation) && has_solid_right(grid, column, elevation)
}

/// Whether any column strictly left of `column` is solid at `elevation`.
pub fn has_solid_left(grid: &OccupancyGrid, column: usize, elevation: usize) -> bool {
    (0..column.min(grid.columns())).any(|c| grid.is_solid(c, elevation))
}

/// Whether any column strictly right of `column` is solid at `elevation`.
pub fn has_solid_right(grid: &OccupancyGrid, column: usize, elevation: usize) -> bool {
    (column.saturating_add(1)..grid.columns()).any(|c| grid.is_solid(c, elevation))
}

/// For each column, the tallest height among the columns strictly left of it.
///
/// The leftmost entry is 0: there is nothing to its left.
pub fn left_maxima(heights: &HeightSequence) -> Vec<u64> {
    heights
        .iter()
        .scan(0u64, |seen, height| {
            let before = *seen;
            *seen = (*seen).max(height);
            Some(before)
        })
        .collect()
}

/// For each column, the tallest height among the columns strictly right of it.
///
/// The rightmost entry is 0.
pub fn right_maxima(heights: &HeightSequence) -> Vec<u64> {
    let mut maxima: Vec<u64> = heights
        .iter()
        .rev()
        .scan(0u64, |seen, height| {
            let before = *seen;
            *seen = (*seen).max(height);
            Some(before)
        })
        .collect();
    maxima.reverse();
    maxima
}

/// Trapped depth per column: `min(left, right) - height`, floored at 0.
pub fn water_levels(heights: &HeightSequence) -> Vec<u64> {
    let left = left_maxima(heights);
    let right = right_maxima(heights);
    heights
        .iter()
        .zip(left.iter().zip(&right))
        .map(|(height, (&l, &r))| l.min(r).saturating_sub(height))
        .collect()
}

/// Counts trapped water from the heights alone.
///
/// Yields the same total as [`collect`] on the grid built from `heights`.
/// Returns `None` when the total does not fit in a `u64`, which only happens
/// for skylines far too tall to build a grid for.
pub fn collect_running_max(heights: &HeightSequence) -> Option<u64> {
    let total = water_levels(heights)
        .into_iter()
        .try_fold(0u64, |total, depth| total.checked_add(depth));
    tracing::debug!(columns = heights.len(), ?total, "Collected water by running maxima");
    total
}

/// Runs the chosen formulation.
///
/// `grid` must have been built from `heights`.
pub fn collect_with(strategy: Strategy, grid: &OccupancyGrid, heights: &HeightSequence) -> u64 {
    match strategy {
        Strategy::Scan => collect(grid),
        // The total is at most `grid.cell_count()`, so the sum always fits.
        Strategy::RunningMax => collect_running_max(heights).unwrap_or_else(|| collect(grid)),
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;
