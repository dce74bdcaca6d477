//! Public API for Cistern.
//!
//! A [`Catchment`] is built from raw heights or from text, validated once, and
//! then measured with the engine [`Strategy`](crate::engine::Strategy) chosen
//! in [`Options`].
//!
//! # Example
//!
//! ```
//! use cistern_core::api::{Catchment, Error, Options};
//!
//! let catchment = Catchment::parse(&Options::default(), "4, 2, 1, 4").unwrap();
//! assert_eq!(catchment.water(), 5);
//!
//! // Negative heights are rejected, never treated as zero.
//! let err = Catchment::parse(&Options::default(), "4, -2, 4").unwrap_err();
//! assert!(matches!(err, Error::InvalidInput { .. }));
//! ```

pub mod catchment;
pub mod error;
pub mod options;

pub use catchment::Catchment;
pub use error::{Diagnostic, Error, Severity};
pub use options::Options;
