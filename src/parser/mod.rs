//! JSONL parser for agent stream-json events.
//!
//! This module provides pure parsing functions for converting input lines
//! into typed [`Event`]s.

use crate::model::{Event, MalformedLine, ParseError};
use serde_json::Value;

/// Result of parsing a line with graceful error handling.
///
/// This allows the pipeline to continue with subsequent lines even when a
/// line is not an event record.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    /// Successfully decoded event.
    Valid(Box<Event>),
    /// A line that could not be decoded; rendered verbatim.
    Malformed(MalformedLine),
}

/// Parse a single line gracefully.
///
/// Unlike [`parse_event()`], this function never returns an error. Instead it
/// returns either a decoded event or a [`MalformedLine`] holding the raw text.
///
/// # Arguments
///
/// * `raw` - The raw input line
/// * `line_number` - The line number (1-indexed) for diagnostics
pub fn parse_event_graceful(raw: &str, line_number: usize) -> ParseResult {
    match parse_event(raw, line_number) {
        Ok(event) => ParseResult::Valid(Box::new(event)),
        Err(parse_error) => {
            ParseResult::Malformed(MalformedLine::new(line_number, raw, parse_error.to_string()))
        }
    }
}

/// Parse a single line into an [`Event`].
///
/// The line must be a JSON object. An object without a string `type` is a
/// record of no interest and decodes to [`Event::Other`], as do unknown kinds.
/// Fields of known kinds decode leniently: a field of the wrong JSON type
/// reads as absent.
///
/// # Errors
///
/// Returns `ParseError` if:
/// - the line is not valid JSON
/// - the JSON value is not an object
/// - a known event kind cannot be decoded at all
pub fn parse_event(raw: &str, line_number: usize) -> Result<Event, ParseError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| ParseError::InvalidJson {
        line: line_number,
        message: e.to_string(),
    })?;

    let object = value.as_object().ok_or(ParseError::NotAnObject { line: line_number })?;
    let Some(kind) = object.get("type").and_then(Value::as_str).map(str::to_string) else {
        return Ok(Event::Other);
    };

    serde_json::from_value(value).map_err(|e| ParseError::InvalidShape {
        line: line_number,
        kind,
        message: e.to_string(),
    })
}
