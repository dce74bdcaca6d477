use thiserror::Error;

use super::{Rule, Span};
use crate::api::{Diagnostic, Severity};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The text is not a height list.
    #[error("{0}")]
    Syntax(String),

    /// An integer literal does not fit a 64-bit signed height.
    #[error("height `{0}` is out of range")]
    HeightOutOfRange(String),
}

/// A parse failure with the location it happened at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub source_code: String,
}

impl ParseError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help) = match &self.kind {
            ParseErrorKind::Syntax(_) => (
                "P001",
                "Heights are integers separated by commas or spaces, e.g. `[4, 0, 2]`",
            ),
            ParseErrorKind::HeightOutOfRange(_) => {
                ("P002", "Heights must fit in a 64-bit signed integer")
            }
        };
        Diagnostic {
            severity: Severity::Error,
            message: self.kind.to_string(),
            span: self.span.clone(),
            help: vec![help.to_string()],
            code: Some(code.to_string()),
        }
    }
}

fn rule_name(rule: &Rule) -> String {
    match rule {
        Rule::height => "height".to_string(),
        Rule::sequence => "height list".to_string(),
        Rule::EOI => "end of input".to_string(),
        other => format!("{other:?}"),
    }
}

/// Converts a pest error, keeping its location as a span.
pub(crate) fn convert_pest_error(error: pest::error::Error<Rule>, source: &str) -> ParseError {
    let error = error.renamed_rules(rule_name);
    let span = match error.location {
        pest::error::InputLocation::Pos(pos) => Span::new(pos, (pos + 1).min(source.len())),
        pest::error::InputLocation::Span((start, end)) => Span::new(start, end),
    };
    let message = match &error.variant {
        pest::error::ErrorVariant::CustomError { message } => message.clone(),
        variant @ pest::error::ErrorVariant::ParsingError { .. } => variant.message().into_owned(),
    };
    ParseError {
        kind: ParseErrorKind::Syntax(message),
        span,
        source_code: source.to_string(),
    }
}
