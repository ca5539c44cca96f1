//! Line emitter for rendered output.
//!
//! Every line is written and flushed before the next input line is read, so
//! a consumer tailing the output (or a file it is redirected to) sees each
//! line as soon as it is produced.

use crate::model::error::OutputError;
use std::io::Write;

/// Writes rendered lines to a destination stream, one flush per line.
pub struct LineEmitter<W: Write> {
    writer: W,
    lines_written: usize,
}

impl<W: Write> LineEmitter<W> {
    /// Create an emitter over any writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    /// Write one line followed by `\n`, then flush.
    ///
    /// # Errors
    ///
    /// Returns `OutputError::Io` if the write or flush fails.
    pub fn emit(&mut self, line: &str) -> Result<(), OutputError> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        self.lines_written += 1;
        Ok(())
    }

    /// Emit lines in order, stopping at the first failure.
    pub fn emit_all<I, S>(&mut self, lines: I) -> Result<(), OutputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.emit(line.as_ref())?;
        }
        Ok(())
    }

    /// Number of lines emitted so far.
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Consume the emitter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
