//! Public error types for the Cistern API.
//!
//! Internal errors ([`ParseError`], [`InputError`]) are converted to these
//! public types at API boundaries. An invalid input is always reported as an
//! error, never as a zero result.

use thiserror::Error;

use crate::heights::InputError;
use crate::parser::{ParseError, ParsedHeights, Span};

/// Public error type for all Cistern operations.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The text is not a height list.
    #[error("Parse error: {}", .diagnostic.message)]
    Parse {
        diagnostic: Diagnostic,
        source_code: String,
        filename: Option<String>,
    },

    /// The heights parsed but are not a valid skyline (e.g. a negative height).
    #[error("Invalid input: {}", .diagnostic.message)]
    InvalidInput {
        diagnostic: Diagnostic,
        source_code: String,
        filename: Option<String>,
    },

    /// The occupancy grid would exceed the configured cell limit.
    #[error("Resource limit exceeded: {0}")]
    ResourceExceeded(String),
}

impl Error {
    /// Set the filename for this error.
    pub fn with_filename(self, filename: impl Into<String>) -> Self {
        let filename = Some(filename.into());
        match self {
            Error::Parse {
                diagnostic,
                source_code,
                ..
            } => Error::Parse {
                diagnostic,
                source_code,
                filename,
            },
            Error::InvalidInput {
                diagnostic,
                source_code,
                ..
            } => Error::InvalidInput {
                diagnostic,
                source_code,
                filename,
            },
            // ResourceExceeded has no source context
            other => other,
        }
    }

    /// Set the filename if provided, otherwise return self unchanged.
    pub fn with_filename_opt(self, filename: Option<&str>) -> Self {
        match filename {
            Some(f) => self.with_filename(f),
            None => self,
        }
    }

    /// Get the filename associated with this error, if any.
    pub fn filename(&self) -> Option<&str> {
        match self {
            Error::Parse { filename, .. } | Error::InvalidInput { filename, .. } => {
                filename.as_deref()
            }
            Error::ResourceExceeded(_) => None,
        }
    }

    /// The diagnostic carried by this error, if it has a source location.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Error::Parse { diagnostic, .. } | Error::InvalidInput { diagnostic, .. } => {
                Some(diagnostic)
            }
            Error::ResourceExceeded(_) => None,
        }
    }

    /// Converts an input error, pointing at the offending value in `source`.
    pub(crate) fn from_input(err: InputError, parsed: &ParsedHeights, source: &str) -> Self {
        match err {
            InputError::NegativeHeight { column, height } => {
                let span = parsed
                    .span_of(column)
                    .cloned()
                    .unwrap_or_else(|| parsed.span.clone());
                Error::InvalidInput {
                    diagnostic: Diagnostic {
                        severity: Severity::Error,
                        message: format!("Negative height {height} in column {column}"),
                        span,
                        help: vec!["Column heights must be zero or greater".to_string()],
                        code: Some("E001".to_string()),
                    },
                    source_code: source.to_string(),
                    filename: None,
                }
            }
            err @ InputError::GridTooLarge { .. } => Error::ResourceExceeded(err.to_string()),
        }
    }
}

/// A diagnostic message with a source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the issue.
    pub span: Span,

    /// Help messages suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g., "E001").
    pub code: Option<String>,
}

/// Severity level for diagnostics.
///
/// Every diagnostic the crate raises stops the measurement, so there is a
/// single level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

// ============================================================================
// Conversion from internal errors
// ============================================================================

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse {
            diagnostic: err.to_diagnostic(),
            source_code: err.source_code,
            filename: None,
        }
    }
}

/// Input errors raised without source text (e.g. from a slice of heights).
impl From<InputError> for Error {
    fn from(err: InputError) -> Self {
        match err {
            InputError::NegativeHeight { .. } => Error::InvalidInput {
                diagnostic: Diagnostic {
                    severity: Severity::Error,
                    message: err.to_string(),
                    span: Span::default(),
                    help: vec!["Column heights must be zero or greater".to_string()],
                    code: Some("E001".to_string()),
                },
                source_code: String::new(),
                filename: None,
            },
            InputError::GridTooLarge { .. } => Error::ResourceExceeded(err.to_string()),
        }
    }
}
