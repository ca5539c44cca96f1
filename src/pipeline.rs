//! Single-pass pipeline: read a line, interpret it, emit its output.
//!
//! The loop is fully sequential. Session counters are owned by one run and
//! handed to the interpreter by `&mut`; nothing outlives the run.

use crate::config::RenderConfig;
use crate::interpreter::Interpreter;
use crate::model::{AppError, SessionCounters};
use crate::sink::LineEmitter;
use crate::source::LineReader;
use std::io::{BufRead, Write};
use tracing::info;

/// What a completed run saw and produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Non-empty input lines interpreted.
    pub lines_read: usize,
    /// Output lines written.
    pub lines_written: usize,
    /// Input lines that were not event records and were passed through.
    pub passed_through: usize,
    /// Final session counters.
    pub counters: SessionCounters,
}

/// Translate the whole input stream with the default rendering settings.
///
/// Returns when the input reaches end of stream.
///
/// # Errors
///
/// Returns `AppError` only for I/O failures on `input` or `output`.
/// Malformed input lines never fail the run.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<RunSummary, AppError> {
    run_with(RenderConfig::default(), input, output)
}

/// Translate the whole input stream with explicit rendering settings.
pub fn run_with<R: BufRead, W: Write>(
    config: RenderConfig,
    input: R,
    output: W,
) -> Result<RunSummary, AppError> {
    drive(config, LineReader::new(input), output)
}

/// Translate the process's stdin to its stdout with the default settings.
///
/// # Errors
///
/// Returns `AppError` for I/O failures; a closed stdout is reported as a
/// broken pipe (see [`AppError::is_broken_pipe`]).
pub fn run_stdio() -> Result<RunSummary, AppError> {
    drive(
        RenderConfig::default(),
        LineReader::stdin(),
        std::io::stdout().lock(),
    )
}

fn drive<R: BufRead, W: Write>(
    config: RenderConfig,
    mut reader: LineReader<R>,
    output: W,
) -> Result<RunSummary, AppError> {
    let mut interpreter = Interpreter::new(config);
    let mut emitter = LineEmitter::new(output);
    let mut counters = SessionCounters::new();

    while let Some(line) = reader.next_line()? {
        let rendered = interpreter.interpret(&line, &mut counters);
        emitter.emit_all(rendered)?;
    }

    let summary = RunSummary {
        lines_read: interpreter.records_seen(),
        lines_written: emitter.lines_written(),
        passed_through: interpreter.passed_through(),
        counters,
    };

    info!(
        lines_read = summary.lines_read,
        lines_written = summary.lines_written,
        passed_through = summary.passed_through,
        tool_calls = summary.counters.tool_calls(),
        "Input stream ended"
    );

    Ok(summary)
}
