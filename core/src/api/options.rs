use crate::engine::Strategy;
use crate::grid::DEFAULT_MAX_CELLS;

/// Configuration for building and measuring a [`Catchment`](super::Catchment).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Engine formulation used by [`Catchment::water`](super::Catchment::water).
    pub strategy: Strategy,

    /// Upper bound on `columns * rows` of the occupancy grid.
    pub max_cells: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strategy: Strategy::Scan,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl Options {
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    pub fn with_max_cells(self, max_cells: usize) -> Self {
        Self { max_cells, ..self }
    }
}
