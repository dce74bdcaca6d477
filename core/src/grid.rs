//! The occupancy grid: which (column, elevation) cells are solid.
//!
//! Every column spans the same elevation range, `0..max(heights)`, so a column
//! shorter than the tallest has empty cells above its own height. Cells are
//! stored row-major in a flat vector, ground row first.

use crate::heights::{HeightSequence, InputError};

/// Default upper bound on `columns * rows` for a built grid.
pub const DEFAULT_MAX_CELLS: usize = 1 << 24;

/// A rectangular solid/empty table indexed by (column, elevation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    columns: usize,
    rows: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Builds a grid from raw heights with the default cell limit.
    ///
    /// Negative heights are rejected before anything is allocated.
    pub fn build(heights: &[i64]) -> Result<Self, InputError> {
        Self::build_with_limit(heights, DEFAULT_MAX_CELLS)
    }

    /// Builds a grid from raw heights, failing if it would exceed `max_cells`.
    pub fn build_with_limit(heights: &[i64], max_cells: usize) -> Result<Self, InputError> {
        let heights = HeightSequence::new(heights)?;
        Self::from_heights(&heights, max_cells)
    }

    /// Builds a grid from already validated heights.
    pub fn from_heights(heights: &HeightSequence, max_cells: usize) -> Result<Self, InputError> {
        let columns = heights.len();
        let max = heights.max();
        let too_large = || InputError::GridTooLarge {
            columns,
            rows: max,
            limit: max_cells,
        };

        let rows = usize::try_from(max).map_err(|_| too_large())?;
        let cell_count = columns.checked_mul(rows).ok_or_else(too_large)?;
        if cell_count > max_cells {
            return Err(too_large());
        }

        let mut cells = Vec::with_capacity(cell_count);
        for elevation in 0..rows as u64 {
            cells.extend(heights.iter().map(|height| elevation < height));
        }

        tracing::debug!(columns, rows, "Built occupancy grid");
        Ok(Self {
            columns,
            rows,
            cells,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of elevations, equal to the tallest column's height.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether the cell is solid. Out-of-range coordinates are empty.
    pub fn is_solid(&self, column: usize, elevation: usize) -> bool {
        if column >= self.columns || elevation >= self.rows {
            return false;
        }
        self.cells[elevation * self.columns + column]
    }

    /// The solid cells of one elevation, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `elevation >= self.rows()`.
    pub fn row(&self, elevation: usize) -> &[bool] {
        let start = elevation * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Height of a column recovered from the grid: its count of solid cells.
    pub fn column_height(&self, column: usize) -> usize {
        (0..self.rows)
            .take_while(|&elevation| self.is_solid(column, elevation))
            .count()
    }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
