//! Domain model types (pure).
//!
//! All types in this module are pure data; decoding lives in `parser`.

pub mod counters;
pub mod error;
pub mod event;
pub mod malformed_line;
pub mod tool;

// Re-export for convenience
pub use counters::SessionCounters;
pub use error::{AppError, InputError, OutputError, ParseError};
pub use event::{
    AssistantEvent, AssistantMessage, ContentBlock, Event, ResultSummary, SystemEvent, ToolInput, ToolUse, SUBTYPE_INIT,
};
pub use malformed_line::MalformedLine;
pub use tool::ToolName;
