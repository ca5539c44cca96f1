//! Run-scoped session counters.

/// Cumulative statistics for one run, reported in the final summary.
///
/// Counters only ever grow: there is no way to decrement or reset them short
/// of building a new value for a new run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionCounters {
    tool_calls: u64,
    text_chars: u64,
}

impl SessionCounters {
    /// Fresh counters for a new run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one `tool_use` block.
    pub fn record_tool_call(&mut self) {
        self.tool_calls += 1;
    }

    /// Record emitted assistant text of `chars` characters.
    pub fn record_text(&mut self, chars: usize) {
        self.text_chars += chars as u64;
    }

    /// Tool invocations seen so far.
    pub fn tool_calls(&self) -> u64 {
        self.tool_calls
    }

    /// Characters of assistant text emitted so far.
    pub fn text_chars(&self) -> u64 {
        self.text_chars
    }
}
