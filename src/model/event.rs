//! Event types for agent stream-json records.
//!
//! Each input line decodes into one [`Event`]. Fields the agent may omit are
//! `Option`s here; defaults are resolved by the accessors, at read time.
//!
//! Decoding is best-effort below the `type` discriminator: a field holding
//! the wrong JSON type reads as absent, and a content block that does not fit
//! any known shape becomes [`ContentBlock::Other`]. One bad block never hides
//! its neighbours.

use crate::model::ToolName;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// String-keyed tool parameters, exactly as the agent sent them.
pub type ToolInput = serde_json::Map<String, Value>;

/// Decode a field, treating a value of the wrong JSON type as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

// ===== Event =====

/// One decoded record from the input stream.
///
/// The `type` field alone selects the variant. Unrecognized types decode to
/// [`Event::Other`] and render nothing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Session lifecycle notifications (`init`, hook responses, ...)
    System(SystemEvent),
    /// A model turn: text and tool invocations
    Assistant(AssistantEvent),
    /// Final summary emitted when the session ends
    Result(ResultSummary),
    /// Any other event kind (`user`, `stream_event`, ...)
    #[serde(other)]
    Other,
}

// ===== System =====

/// Subtype carried by the session-start event.
pub const SUBTYPE_INIT: &str = "init";

/// A `system` event.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SystemEvent {
    #[serde(default, deserialize_with = "lenient")]
    subtype: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    tools: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    model: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    cwd: Option<String>,
}

impl SystemEvent {
    /// Event subtype, if present.
    pub fn subtype(&self) -> Option<&str> {
        self.subtype.as_deref()
    }

    /// True for the session-start notification.
    pub fn is_init(&self) -> bool {
        self.subtype() == Some(SUBTYPE_INIT)
    }

    /// Number of tools advertised to the agent. Absent list counts as zero.
    pub fn tool_count(&self) -> usize {
        self.tools.as_ref().map_or(0, Vec::len)
    }

    /// Model the session runs on, if reported.
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Working directory of the session, if reported.
    pub fn cwd(&self) -> Option<&str> {
        self.cwd.as_deref()
    }
}

// ===== Assistant =====

/// An `assistant` event.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AssistantEvent {
    #[serde(default, deserialize_with = "lenient")]
    message: Option<AssistantMessage>,
}

impl AssistantEvent {
    /// Content blocks in message order.
    ///
    /// Plain-string content is presented as a single text block; a missing
    /// message or content yields no blocks. Elements that are not well-formed
    /// blocks come back as [`ContentBlock::Other`] in their position.
    pub fn blocks(&self) -> Vec<ContentBlock> {
        match self.message.as_ref().and_then(|m| m.content.as_ref()) {
            Some(Value::Array(items)) => items.iter().map(ContentBlock::from_value).collect(),
            Some(Value::String(text)) => vec![ContentBlock::Text {
                text: Some(text.clone()),
            }],
            _ => Vec::new(),
        }
    }
}

/// The `message` payload of an assistant event.
///
/// `content` is kept as raw JSON so each block can be decoded on its own.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    content: Option<Value>,
}

// ===== ContentBlock =====

/// One element of an assistant message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Visible assistant output
    Text {
        /// Text payload; absent means empty
        #[serde(default, deserialize_with = "lenient")]
        text: Option<String>,
    },
    /// Tool invocation
    ToolUse(ToolUse),
    /// Thinking, tool results, images, untyped or malformed blocks, ...
    #[serde(other)]
    Other,
}

impl ContentBlock {
    /// Decode one content block; anything that does not fit is `Other`.
    pub fn from_value(value: &Value) -> Self {
        ContentBlock::deserialize(value).unwrap_or(ContentBlock::Other)
    }
}

/// A `tool_use` content block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ToolUse {
    #[serde(default, deserialize_with = "lenient")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    input: Option<ToolInput>,
}

impl ToolUse {
    /// Tool-use id linking to the later tool result, if present.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Raw tool name; empty when absent.
    pub fn raw_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Classified tool name.
    pub fn name(&self) -> ToolName {
        ToolName::parse(self.raw_name())
    }

    /// Tool parameters; empty when absent or not an object.
    pub fn input(&self) -> ToolInput {
        self.input.clone().unwrap_or_default()
    }
}

// ===== Result =====

/// A `result` event closing the session.
///
/// All fields are optional; missing numbers read as zero and a missing error
/// flag reads as success.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResultSummary {
    #[serde(default, deserialize_with = "lenient")]
    cost_usd: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    total_cost_usd: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    duration_ms: Option<f64>,
    #[serde(default)]
    num_turns: Option<Value>,
    #[serde(default)]
    is_error: Option<Value>,
}

impl ResultSummary {
    /// Session cost in USD. `cost_usd` wins over `total_cost_usd`.
    pub fn cost_usd(&self) -> f64 {
        self.cost_usd.or(self.total_cost_usd).unwrap_or(0.0)
    }

    /// Wall-clock duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms.unwrap_or(0.0)
    }

    /// Duration in whole seconds, rounded half away from zero.
    pub fn duration_secs(&self) -> i64 {
        (self.duration_ms() / 1000.0).round() as i64
    }

    /// Number of model turns.
    ///
    /// Integral floats (`3.0`) count; anything else reads as zero.
    pub fn num_turns(&self) -> u64 {
        let Some(Value::Number(n)) = &self.num_turns else {
            return 0;
        };
        n.as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                    .map(|f| f as u64)
            })
            .unwrap_or(0)
    }

    /// Whether the session ended in error.
    ///
    /// Follows JSON truthiness: `false`, `0`, `""`, empty containers and
    /// `null` are all success.
    pub fn is_error(&self) -> bool {
        match &self.is_error {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(map)) => !map.is_empty(),
        }
    }
}
