use crate::engine::{self, Strategy};
use crate::grid::OccupancyGrid;
use crate::heights::{HeightSequence, InputError};
use crate::parser;
use crate::render::{self, RenderStyle};

use super::{Error, Options};

/// A validated skyline together with its occupancy grid.
///
/// Immutable once built; every measurement is recomputed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catchment {
    heights: HeightSequence,
    grid: OccupancyGrid,
    strategy: Strategy,
}

impl Catchment {
    /// Validates `heights` and builds the grid under `options.max_cells`.
    pub fn new(options: &Options, heights: &[i64]) -> Result<Self, InputError> {
        Self::from_heights(options, HeightSequence::new(heights)?)
    }

    pub fn from_heights(options: &Options, heights: HeightSequence) -> Result<Self, InputError> {
        let grid = OccupancyGrid::from_heights(&heights, options.max_cells)?;
        Ok(Self {
            heights,
            grid,
            strategy: options.strategy,
        })
    }

    /// Parses a single height list and builds its catchment.
    ///
    /// A negative height is reported as [`Error::InvalidInput`] pointing at
    /// the offending literal.
    pub fn parse(options: &Options, source: &str) -> Result<Self, Error> {
        let parsed = parser::parse(source)?;
        Self::new(options, &parsed.values).map_err(|e| Error::from_input(e, &parsed, source))
    }

    /// Parses one height list per line. Fails on the first invalid line.
    pub fn parse_batch(options: &Options, source: &str) -> Result<Vec<Self>, Error> {
        parser::parse_batch(source)?
            .iter()
            .map(|parsed| {
                Self::new(options, &parsed.values)
                    .map_err(|e| Error::from_input(e, parsed, source))
            })
            .collect()
    }

    pub fn heights(&self) -> &HeightSequence {
        &self.heights
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Units of trapped water, using the configured strategy.
    pub fn water(&self) -> u64 {
        self.water_with(self.strategy)
    }

    pub fn water_with(&self, strategy: Strategy) -> u64 {
        engine::collect_with(strategy, &self.grid, &self.heights)
    }

    /// Trapped depth per column.
    pub fn water_levels(&self) -> Vec<u64> {
        engine::water_levels(&self.heights)
    }

    pub fn draw(&self, style: &RenderStyle) -> String {
        render::draw(&self.grid, style)
    }

    /// Like [`Catchment::draw`], with each row prefixed by its elevation.
    pub fn draw_labeled(&self, style: &RenderStyle) -> String {
        render::draw_labeled(&self.grid, style)
    }
}
