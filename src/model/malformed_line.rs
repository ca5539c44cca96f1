//! Malformed line type for input that is not an event record.
//!
//! When a line cannot be decoded into an Event we keep the raw text so the
//! renderer can pass it through unchanged.

/// An input line that could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    line_number: usize,
    raw_line: String,
    error_message: String,
}

impl MalformedLine {
    /// Create a new malformed line.
    ///
    /// # Arguments
    ///
    /// * `line_number` - The line number in the input (1-indexed)
    /// * `raw_line` - The raw line content that failed to decode
    /// * `error_message` - Human-readable decode error
    pub fn new(
        line_number: usize,
        raw_line: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            raw_line: raw_line.into(),
            error_message: error_message.into(),
        }
    }

    /// Get the line number where the error occurred.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Get the raw line content.
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// Get the error message.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Consume into the raw line.
    pub fn into_raw_line(self) -> String {
        self.raw_line
    }
}
