//! Error types for buildlog.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions up to [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from the binary's run loop
//!   - [`InputError`] - Failures reading lines from stdin
//!   - [`OutputError`] - Failures writing rendered lines to stdout
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing setup failures
//! - [`ParseError`] - A line that is not a structured event record
//!
//! # Error Recovery Strategy
//!
//! Parse errors are **never fatal**: the offending line is passed through to the
//! output verbatim and the stream continues. Only I/O failures on the process's
//! own stdin/stdout end a run early.

use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
///
/// Parse failures are deliberately absent: they are recovered by pass-through
/// inside the interpreter and never reach this type.
///
/// # Examples
///
/// ```no_run
/// use buildlog::model::error::{AppError, InputError};
///
/// fn run_app() -> Result<(), AppError> {
///     // InputError automatically converts to AppError via From
///     read_next()?;
///     Ok(())
/// }
/// # fn read_next() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the input stream.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// Failed to write the rendered log.
    #[error("Failed to write output: {0}")]
    OutputWrite(#[from] OutputError),

    /// Diagnostics could not be initialized.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] LoggingError),
}

impl AppError {
    /// Whether this error means the downstream consumer went away.
    ///
    /// A closed stdout (e.g. `buildlog | head`) ends the run the same way a
    /// closed stdin does: quietly.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, AppError::OutputWrite(err) if err.is_broken_pipe())
    }
}

/// Errors encountered when reading lines from the input stream.
///
/// End of input is not an error; it is reported as `Ok(None)` by the reader.
#[derive(Debug, Error)]
pub enum InputError {
    /// I/O error reading from the input source.
    ///
    /// ```
    /// use buildlog::model::error::InputError;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
    /// let err: InputError = io.into();
    /// assert!(err.to_string().contains("disk on fire"));
    /// ```
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered when writing rendered lines.
#[derive(Debug, Error)]
pub enum OutputError {
    /// I/O error writing or flushing the destination stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OutputError {
    /// Returns true when the reader on the other end of the pipe has exited.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            OutputError::Io(err) => err.kind() == std::io::ErrorKind::BrokenPipe,
        }
    }
}

/// Reasons a line could not be decoded into an [`Event`](crate::model::Event).
///
/// Every variant is a *structural decode failure*. None of them stop the
/// stream: the interpreter emits the raw line unchanged and moves on. Missing
/// optional fields inside a well-formed record are not errors at all; they
/// resolve to placeholders when rendered.
///
/// All variants carry the 1-based line number so diagnostics can point at the
/// offending input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line is not syntactically valid JSON.
    ///
    /// ```
    /// use buildlog::model::error::ParseError;
    ///
    /// let err = ParseError::InvalidJson {
    ///     line: 42,
    ///     message: "expected value at line 1 column 1".to_string(),
    /// };
    /// assert!(err.to_string().contains("line 42"));
    /// ```
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// 1-based input line number.
        line: usize,
        /// Message from `serde_json`.
        message: String,
    },

    /// The line is valid JSON but not an object (e.g. a bare number or array).
    #[error("Expected a JSON object at line {line}")]
    NotAnObject {
        /// 1-based input line number.
        line: usize,
    },

    /// A known event kind that could not be decoded into its typed form.
    ///
    /// Fields decode leniently, so this only covers records serde rejects as a
    /// whole.
    #[error("Malformed '{kind}' event at line {line}: {message}")]
    InvalidShape {
        /// 1-based input line number.
        line: usize,
        /// Value of the `type` field.
        kind: String,
        /// Message from `serde_json`.
        message: String,
    },
}

impl ParseError {
    /// Line number the error refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseError::InvalidJson { line, .. }
            | ParseError::NotAnObject { line }
            | ParseError::InvalidShape { line, .. } => *line,
        }
    }
}
