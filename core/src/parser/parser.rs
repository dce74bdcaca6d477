use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use super::error::{ParseError, ParseErrorKind, convert_pest_error};
use super::{ParsedHeights, Span};

#[derive(Parser)]
#[grammar = "parser/heights.pest"]
pub struct HeightsParser;

/// Parses exactly one height list. Empty input is the empty list.
pub fn parse(source: &str) -> Result<ParsedHeights, ParseError> {
    let mut pairs = HeightsParser::parse(Rule::main, source).map_err(|e| {
        tracing::debug!("Pest parser failed with: {:?}", e);
        convert_pest_error(e, source)
    })?;
    let Some(main) = pairs.next() else {
        return Ok(ParsedHeights::default());
    };
    let sequences = parse_sequences(main, source)?;
    Ok(sequences.into_iter().next().unwrap_or_default())
}

/// Parses one height list per line, skipping blank and comment-only lines.
pub fn parse_batch(source: &str) -> Result<Vec<ParsedHeights>, ParseError> {
    let mut pairs = HeightsParser::parse(Rule::batch, source).map_err(|e| {
        tracing::debug!("Pest parser failed with: {:?}", e);
        convert_pest_error(e, source)
    })?;
    match pairs.next() {
        Some(batch) => parse_sequences(batch, source),
        None => Ok(Vec::new()),
    }
}

fn parse_sequences(root: Pair<Rule>, source: &str) -> Result<Vec<ParsedHeights>, ParseError> {
    root.into_inner()
        .filter(|pair| pair.as_rule() == Rule::sequence)
        .map(|pair| parse_sequence(pair, source))
        .collect()
}

fn parse_sequence(pair: Pair<Rule>, source: &str) -> Result<ParsedHeights, ParseError> {
    let span = Span::from(pair.as_span());
    let mut values = Vec::new();
    let mut spans = Vec::new();
    for height in pair.into_inner().filter(|p| p.as_rule() == Rule::height) {
        let literal = height.as_str();
        let value = literal.parse::<i64>().map_err(|_| ParseError {
            kind: ParseErrorKind::HeightOutOfRange(literal.to_string()),
            span: Span::from(height.as_span()),
            source_code: source.to_string(),
        })?;
        values.push(value);
        spans.push(Span::from(height.as_span()));
    }
    Ok(ParsedHeights {
        values,
        spans,
        span,
    })
}
