//! Cistern - trapped rainwater over a skyline of columns
//!
//! # Overview
//!
//! Given the heights of adjacent columns, Cistern counts how many unit cells of
//! water stay trapped between them. An empty cell holds water when, at its
//! elevation, some column to its left and some column to its right are at
//! least that tall.
//!
//! # Quick Start
//!
//! ```
//! use cistern::{Catchment, Options};
//!
//! let catchment = Catchment::parse(&Options::default(), "[3, 0, 3, 4, 2, 5]").unwrap();
//! assert_eq!(catchment.water(), 5);
//! ```
//!
//! # Strategies
//!
//! Two engine formulations are available and always agree:
//!
//! 1. **Scan** (`Strategy::Scan`): checks every empty cell of the occupancy grid
//!    for a wall on each side.
//! 2. **Running maxima** (`Strategy::RunningMax`): works on the heights alone
//!    using the tallest column seen from each side.
//!
//! ```
//! use cistern::{Catchment, Options, Strategy};
//!
//! let options = Options::default().with_strategy(Strategy::RunningMax);
//! let catchment = Catchment::new(&options, &[4, 0, 0, 4]).unwrap();
//! assert_eq!(catchment.water(), 8);
//! ```
//!
//! # Errors
//!
//! Malformed text and negative heights are reported as [`Error`]s. Use
//! [`render_error_to`] to print them with the offending source highlighted.

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export public API from cistern_core
pub use cistern_core::api::{Catchment, Diagnostic, Error, Options, Severity};

// Re-export the building blocks
pub use cistern_core::engine::{self, Strategy};
pub use cistern_core::grid::{self, DEFAULT_MAX_CELLS, OccupancyGrid};
pub use cistern_core::heights::{HeightSequence, InputError};
pub use cistern_core::render::{self, RenderStyle};
pub use cistern_core::samples::{SAMPLES, Sample};
