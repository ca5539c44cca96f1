//! Line reader for piped stream-json input.
//!
//! Provides [`LineReader`] for pulling trimmed, non-empty lines from stdin (or
//! any buffered reader) one at a time, blocking until each arrives.

use crate::model::error::InputError;
use std::io::{BufRead, StdinLock};

/// Blocking line source over a buffered reader.
///
/// Supports both live streams (`claude -p ... | buildlog`) and complete
/// input (`cat build.jsonl | buildlog`): each call waits for the next full
/// line or end of input.
///
/// # Design
///
/// - Lines are trimmed at both ends; lines that are empty after trimming are
///   skipped and never returned
/// - Invalid UTF-8 is replaced rather than rejected
/// - Tracks EOF state via `complete` flag; a read error also completes the
///   reader
pub struct LineReader<R: BufRead> {
    reader: R,
    buffer: Vec<u8>,
    complete: bool,
}

impl LineReader<StdinLock<'static>> {
    /// Create a reader over the process's locked stdin.
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl<R: BufRead> LineReader<R> {
    /// Create a reader from any buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            complete: false,
        }
    }

    /// Read the next non-empty line.
    ///
    /// Blocks until a line is available. Returns `Ok(None)` once end of input
    /// is reached and sets the `complete` flag. A final line without a
    /// trailing newline is still returned.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for I/O errors. The reader is then complete
    /// and yields nothing further.
    pub fn next_line(&mut self) -> Result<Option<String>, InputError> {
        loop {
            self.buffer.clear();
            let read = match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(read) => read,
                Err(e) => {
                    self.complete = true;
                    return Err(e.into());
                }
            };
            if read == 0 {
                self.complete = true;
                return Ok(None);
            }

            let line = String::from_utf8_lossy(&self.buffer);
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
    }

    /// Check if EOF has been reached (no more data will arrive).
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.complete {
            return None;
        }
        self.next_line().transpose()
    }
}
