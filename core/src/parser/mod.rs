//! Textual height lists.
//!
//! A sequence is written either bracketed, `[4, 0, 2]`, or bare, `4, 0, 2`.
//! Commas between values are optional and a trailing comma is allowed. `#`
//! starts a comment that runs to the end of the line.
//!
//! Values are parsed as signed integers so that negative heights survive to the
//! grid builder, which is where they are rejected.

mod error;
#[allow(clippy::module_inception)]
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use parser::{HeightsParser, Rule, parse, parse_batch};

use core::ops::Range;

/// A byte range into the parsed source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }

    pub fn start(&self) -> usize {
        self.0.start
    }

    pub fn end(&self) -> usize {
        self.0.end
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(span: pest::Span<'_>) -> Self {
        Span::new(span.start(), span.end())
    }
}

/// One parsed sequence: raw values with the span of each.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedHeights {
    /// Raw values, possibly negative.
    pub values: Vec<i64>,
    /// `spans[i]` covers the literal of `values[i]`.
    pub spans: Vec<Span>,
    /// The whole sequence, brackets included.
    pub span: Span,
}

impl ParsedHeights {
    pub fn span_of(&self, column: usize) -> Option<&Span> {
        self.spans.get(column)
    }
}
