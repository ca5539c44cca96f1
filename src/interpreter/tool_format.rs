//! One-line summaries of tool invocations.

use crate::config::RenderConfig;
use crate::model::{ToolInput, ToolName};
use serde_json::Value;
use std::borrow::Cow;

/// Format a tool call into a one-line summary using the default settings.
///
/// Pure and total: any name and any input produce a line.
///
/// ```
/// use buildlog::interpreter::format_tool;
/// use buildlog::model::{ToolInput, ToolName};
///
/// let mut input = ToolInput::new();
/// input.insert("file_path".into(), "/src/main.rs".into());
/// assert_eq!(format_tool(&ToolName::Read, &input), "[READ] /src/main.rs");
/// ```
pub fn format_tool(name: &ToolName, input: &ToolInput) -> String {
    format_tool_with(&RenderConfig::default(), name, input)
}

/// Format a tool call into a one-line summary.
pub fn format_tool_with(config: &RenderConfig, name: &ToolName, input: &ToolInput) -> String {
    let field = |key: &str| param(input, key).unwrap_or(Cow::Borrowed(config.placeholder));

    match name {
        ToolName::Read => format!("[READ] {}", field("file_path")),
        ToolName::Write => format!("[WRITE] {}", field("file_path")),
        ToolName::Edit => format!("[EDIT] {}", field("file_path")),
        ToolName::Bash => format!("[BASH] {}", bash_label(config, input)),
        ToolName::Glob => format!("[GLOB] {}", field("pattern")),
        ToolName::Grep => format!("[GREP] {}", field("pattern")),
        ToolName::Skill => format!("[SKILL] {}", field("skill")),
        ToolName::TaskCreate => format!("[TASK+] {}", field("subject")),
        ToolName::TaskUpdate => {
            format!("[TASK~] #{} -> {}", field("taskId"), field("status"))
        }
        ToolName::Other(raw) => format!("[TOOL] {raw}"),
    }
}

/// Description if the agent gave a non-empty one, else the command preview.
fn bash_label<'a>(config: &RenderConfig, input: &'a ToolInput) -> Cow<'a, str> {
    match param(input, "description") {
        Some(description) if !description.is_empty() => description,
        _ => {
            let command = param(input, "command").unwrap_or_default();
            truncate_chars(command, config.bash_preview_chars)
        }
    }
}

/// Cut `text` to `max` characters, marking the cut with `...`.
fn truncate_chars(text: Cow<'_, str>, max: usize) -> Cow<'_, str> {
    let cut = text.char_indices().nth(max).map(|(index, _)| index);
    match cut {
        Some(cut) => Cow::Owned(format!("{}...", &text[..cut])),
        None => text,
    }
}

/// Read a parameter as display text.
///
/// Strings are used as-is, `null` counts as absent, anything else renders as
/// compact JSON.
fn param<'a>(input: &'a ToolInput, key: &str) -> Option<Cow<'a, str>> {
    match input.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        other => Some(Cow::Owned(other.to_string())),
    }
}
