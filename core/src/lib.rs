//! Cistern core: trapped rainwater over a skyline of columns.
//!
//! The crate is split along the data flow:
//!
//! - [`heights`]: validated column heights ([`HeightSequence`]).
//! - [`grid`]: the occupancy model built from the heights ([`OccupancyGrid`]).
//! - [`engine`]: the water engine that counts enclosed empty cells.
//! - [`parser`]: the textual height-list syntax.
//! - [`render`]: text drawing of a grid.
//! - [`api`]: the stable public surface ([`api::Catchment`], [`api::Error`]).
//!
//! # Example
//!
//! ```
//! use cistern_core::api::{Catchment, Options};
//!
//! let catchment = Catchment::parse(&Options::default(), "[4, 0, 0, 4]").unwrap();
//! assert_eq!(catchment.water(), 8);
//! ```

pub mod api;
pub mod engine;
pub mod grid;
pub mod heights;
pub mod parser;
pub mod render;
pub mod samples;

pub use engine::Strategy;
pub use grid::OccupancyGrid;
pub use heights::{HeightSequence, InputError};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_collect_basin() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
