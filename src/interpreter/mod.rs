//! Record interpreter: turns one input line into rendered log lines.
//!
//! Each line is decoded with [`parse_event_graceful`], dispatched on its
//! event kind, and rendered into zero or more output lines. Lines that are not
//! event records pass through verbatim. The run's [`SessionCounters`] are
//! passed in by the caller and only ever incremented here.

mod tool_format;

pub use tool_format::{format_tool, format_tool_with};

use crate::config::RenderConfig;
use crate::model::{
    AssistantEvent, ContentBlock, Event, ResultSummary, SessionCounters, SystemEvent,
};
use crate::parser::{parse_event_graceful, ParseResult};
use chrono::{Local, NaiveTime};
use tracing::{debug, info};

/// Renders decoded events as build-log lines.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    config: RenderConfig,
    records_seen: usize,
    passed_through: usize,
}

impl Interpreter {
    /// Create an interpreter with the given rendering settings.
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            records_seen: 0,
            passed_through: 0,
        }
    }

    /// Rendering settings in use.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Number of lines interpreted so far.
    pub fn records_seen(&self) -> usize {
        self.records_seen
    }

    /// Number of lines that were not event records and passed through.
    pub fn passed_through(&self) -> usize {
        self.passed_through
    }

    /// Interpret one non-empty input line, stamping session starts with the
    /// current local time.
    pub fn interpret(&mut self, line: &str, counters: &mut SessionCounters) -> Vec<String> {
        self.interpret_at(line, counters, Local::now().time())
    }

    /// Interpret one non-empty input line with an explicit clock reading.
    ///
    /// Never fails: a line that does not decode is returned unchanged as the
    /// only output line, and the counters are left untouched.
    pub fn interpret_at(
        &mut self,
        line: &str,
        counters: &mut SessionCounters,
        now: NaiveTime,
    ) -> Vec<String> {
        self.records_seen += 1;

        match parse_event_graceful(line, self.records_seen) {
            ParseResult::Valid(event) => self.render_event(&event, counters, now),
            ParseResult::Malformed(malformed) => {
                self.passed_through += 1;
                debug!(
                    line = malformed.line_number(),
                    error = malformed.error_message(),
                    "Passing through line that is not an event record"
                );
                vec![malformed.into_raw_line()]
            }
        }
    }

    fn render_event(
        &self,
        event: &Event,
        counters: &mut SessionCounters,
        now: NaiveTime,
    ) -> Vec<String> {
        match event {
            Event::System(system) => self.render_system(system, now).into_iter().collect(),
            Event::Assistant(assistant) => self.render_assistant(assistant, counters),
            Event::Result(result) => self.render_result(result, counters),
            Event::Other => {
                debug!(line = self.records_seen, "Ignoring unhandled event type");
                Vec::new()
            }
        }
    }

    /// Session start banner; other system subtypes render nothing.
    fn render_system(&self, system: &SystemEvent, now: NaiveTime) -> Option<String> {
        if !system.is_init() {
            debug!(subtype = ?system.subtype(), "Ignoring system event");
            return None;
        }

        info!(
            tools = system.tool_count(),
            model = ?system.model(),
            cwd = ?system.cwd(),
            "Session started"
        );
        Some(format!(
            "[{}] Session started ({} tools available)",
            now.format("%H:%M:%S"),
            system.tool_count()
        ))
    }

    fn render_assistant(
        &self,
        assistant: &AssistantEvent,
        counters: &mut SessionCounters,
    ) -> Vec<String> {
        let mut lines = Vec::new();

        for block in assistant.blocks() {
            match block {
                ContentBlock::Text { text } => {
                    let text = text.as_deref().unwrap_or_default().trim();
                    if text.is_empty() {
                        continue;
                    }
                    counters.record_text(text.chars().count());
                    lines.push(text.to_string());
                }
                ContentBlock::ToolUse(tool) => {
                    counters.record_tool_call();
                    lines.push(format_tool_with(&self.config, &tool.name(), &tool.input()));
                }
                ContentBlock::Other => {}
            }
        }

        lines
    }

    /// Framed summary block closing the log.
    fn render_result(&self, result: &ResultSummary, counters: &SessionCounters) -> Vec<String> {
        let status = if result.is_error() { "ERROR" } else { "SUCCESS" };

        info!(
            status,
            tool_calls = counters.tool_calls(),
            text_chars = counters.text_chars(),
            "Session finished"
        );

        let separator = self.config.separator();
        vec![
            String::new(),
            separator.clone(),
            format!(
                "[DONE] {} | {} turns | {} tool calls | {}s | ${:.2}",
                status,
                result.num_turns(),
                counters.tool_calls(),
                result.duration_secs(),
                result.cost_usd()
            ),
            separator,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_915() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 15, 30).unwrap()
    }

    fn run(lines: &[&str]) -> (Vec<String>, SessionCounters) {
        let mut interpreter = Interpreter::default();
        let mut counters = SessionCounters::new();
        let output = lines
            .iter()
            .flat_map(|line| interpreter.interpret_at(line, &mut counters, at_915()))
            .collect();
        (output, counters)
    }

    #[test]
    fn system_init_renders_timestamped_banner() {
        let (output, _) = run(&[r#"{"type":"system","subtype":"init","tools":["Read","Write"]}"#]);
        assert_eq!(output, vec!["[09:15:30] Session started (2 tools available)"]);
    }

    #[test]
    fn interpret_uses_wall_clock_format() {
        let mut interpreter = Interpreter::default();
        let mut counters = SessionCounters::new();
        let output = interpreter.interpret(
            r#"{"type":"system","subtype":"init","tools":[]}"#,
            &mut counters,
        );
        assert_eq!(output.len(), 1);
        let line = &output[0];
        let bytes = line.as_bytes();
        assert_eq!(bytes[0], b'[');
        assert_eq!(bytes[3], b':');
        assert_eq!(bytes[6], b':');
        assert_eq!(&line[9..], "] Session started (0 tools available)");
    }

    #[test]
    fn other_system_subtypes_render_nothing() {
        let (output, _) = run(&[r#"{"type":"system","subtype":"hook_response","tools":["Read"]}"#]);
        assert!(output.is_empty());
    }

    #[test]
    fn tool_use_renders_summary_and_counts() {
        let (output, counters) = run(&[
            r#"{"type":"assistant","message":{"content":[{"type":"tool_use","name":"Read","input":{"file_path":"/a.py"}}]}}"#,
        ]);
        assert_eq!(output, vec!["[READ] /a.py"]);
        assert_eq!(counters.tool_calls(), 1);
    }

    #[test]
    fn text_is_trimmed_and_counted() {
        let (output, counters) = run(&[
            r#"{"type":"assistant","message":{"content":[{"type":"text","text":"  Let me look at the schema. Then the API.\n"}]}}"#,
        ]);
        assert_eq!(output, vec!["Let me look at the schema. Then the API."]);
        assert_eq!(counters.text_chars(), 40);
        assert_eq!(counters.tool_calls(), 0);
    }

    #[test]
    fn text_with_inner_newlines_is_one_line() {
        let (output, _) = run(&[
            r#"{"type":"assistant","message":{"content":[{"type":"text","text":"Plan:\n1. schema\n2. api"}]}}"#,
        ]);
        assert_eq!(output, vec!["Plan:\n1. schema\n2. api"]);
    }

    #[test]
    fn blank_text_renders_nothing_and_counts_nothing() {
        let (output, counters) = run(&[
            r#"{"type":"assistant","message":{"content":[{"type":"text","text":"   \n\t"},{"type":"text"}]}}"#,
        ]);
        assert!(output.is_empty());
        assert_eq!(counters.text_chars(), 0);
    }

    #[test]
    fn mixed_blocks_render_in_order() {
        let (output, counters) = run(&[
            r#"{"type":"assistant","message":{"content":[
                {"type":"thinking","thinking":"..."},
                {"type":"text","text":"Creating the page."},
                {"type":"tool_use","name":"Write","input":{"file_path":"app/page.tsx","content":"..."}},
                {"type":"tool_use","name":"Bash","input":{"command":"npm run lint","description":"Lint"}}
            ]}}"#
                .replace('\n', "")
                .as_str(),
        ]);
        assert_eq!(
            output,
            vec!["Creating the page.", "[WRITE] app/page.tsx", "[BASH] Lint"]
        );
        assert_eq!(counters.tool_calls(), 2);
        assert_eq!(counters.text_chars(), 18);
    }

    #[test]
    fn result_renders_framed_summary() {
        let (output, _) = run(&[
            r#"{"type":"assistant","message":{"content":[{"type":"tool_use","name":"Read","input":{"file_path":"/a.py"}}]}}"#,
            r#"{"type":"result","cost_usd":1.5,"duration_ms":2500,"num_turns":3,"is_error":false}"#,
        ]);
        let separator = "=".repeat(50);
        assert_eq!(
            output,
            vec![
                "[READ] /a.py".to_string(),
                String::new(),
                separator.clone(),
                "[DONE] SUCCESS | 3 turns | 1 tool calls | 3s | $1.50".to_string(),
                separator,
            ]
        );
    }

    #[test]
    fn result_with_error_flag_reports_error() {
        let (output, _) = run(&[r#"{"type":"result","is_error":true}"#]);
        assert_eq!(output[2], "[DONE] ERROR | 0 turns | 0 tool calls | 0s | $0.00");
    }

    #[test]
    fn malformed_line_passes_through_unchanged() {
        let mut interpreter = Interpreter::default();
        let mut counters = SessionCounters::new();
        let output = interpreter.interpret_at("not json at all", &mut counters, at_915());
        assert_eq!(output, vec!["not json at all"]);
        assert_eq!(counters, SessionCounters::new());
        assert_eq!(interpreter.passed_through(), 1);
        assert_eq!(interpreter.records_seen(), 1);
    }

    #[test]
    fn unusable_assistant_content_renders_nothing() {
        let (output, counters) = run(&[
            r#"{"type":"assistant","message":{"content":42}}"#,
            r#"{"type":"assistant","message":"hello"}"#,
            r#"{"type":"assistant"}"#,
        ]);
        assert!(output.is_empty());
        assert_eq!(counters, SessionCounters::new());
    }

    #[test]
    fn typeless_block_does_not_hide_tool_use() {
        let mut interpreter = Interpreter::default();
        let mut counters = SessionCounters::new();
        let output = interpreter.interpret_at(
            r#"{"type":"assistant","message":{"content":[{"type":"tool_use","name":"Read","input":{"file_path":"/a.py"}},{"text":"stray"}]}}"#,
            &mut counters,
            at_915(),
        );
        assert_eq!(output, vec!["[READ] /a.py"]);
        assert_eq!(counters.tool_calls(), 1);
        assert_eq!(interpreter.passed_through(), 0);
    }

    #[test]
    fn non_object_blocks_are_skipped() {
        let (output, counters) = run(&[
            r#"{"type":"assistant","message":{"content":[7,"loose",null,{"type":"tool_use","name":"Glob","input":{"pattern":"**/*.rs"}}]}}"#,
        ]);
        assert_eq!(output, vec!["[GLOB] **/*.rs"]);
        assert_eq!(counters.tool_calls(), 1);
    }

    #[test]
    fn result_with_numeric_error_flag_still_renders() {
        let (output, _) = run(&[
            r#"{"type":"result","cost_usd":0.1,"duration_ms":4000,"num_turns":3,"is_error":0}"#,
        ]);
        assert_eq!(output[2], "[DONE] SUCCESS | 3 turns | 0 tool calls | 4s | $0.10");
    }

    #[test]
    fn result_with_float_turn_count_still_renders() {
        let (output, _) = run(&[r#"{"type":"result","num_turns":3.0,"is_error":1}"#]);
        assert_eq!(output[2], "[DONE] ERROR | 3 turns | 0 tool calls | 0s | $0.00");
    }

    #[test]
    fn record_without_type_renders_nothing() {
        let mut interpreter = Interpreter::default();
        let mut counters = SessionCounters::new();
        let output =
            interpreter.interpret_at(r#"{"session_id":"abc","note":"x"}"#, &mut counters, at_915());
        assert!(output.is_empty());
        assert_eq!(interpreter.passed_through(), 0);

        let (output, _) = run(&[r#"{"type":7,"subtype":"init"}"#]);
        assert!(output.is_empty());
    }

    #[test]
    fn tool_use_without_input_uses_placeholder() {
        let (output, counters) = run(&[
            r#"{"type":"assistant","message":{"content":[{"type":"tool_use","name":"Read"}]}}"#,
        ]);
        assert_eq!(output, vec!["[READ] ?"]);
        assert_eq!(counters.tool_calls(), 1);
    }

    #[test]
    fn tool_use_with_non_object_input_uses_placeholder() {
        let (output, counters) = run(&[
            r#"{"type":"assistant","message":{"content":[{"type":"tool_use","name":"Read","input":"/a.py"}]}}"#,
            r#"{"type":"assistant","message":{"content":[{"type":"tool_use","name":"Grep","input":[1,2]}]}}"#,
        ]);
        assert_eq!(output, vec!["[READ] ?", "[GREP] ?"]);
        assert_eq!(counters.tool_calls(), 2);
    }

    #[test]
    fn system_init_without_tools_counts_zero() {
        let (output, _) = run(&[
            r#"{"type":"system","subtype":"init"}"#,
            r#"{"type":"system","subtype":"init","tools":"Read"}"#,
        ]);
        assert_eq!(
            output,
            vec![
                "[09:15:30] Session started (0 tools available)",
                "[09:15:30] Session started (0 tools available)",
            ]
        );
    }

    #[test]
    fn unknown_event_types_render_nothing() {
        let (output, counters) = run(&[
            r#"{"type":"user","message":{"content":[{"type":"tool_result","tool_use_id":"t","content":"ok"}]}}"#,
            r#"{"type":"stream_event","event":{}}"#,
        ]);
        assert!(output.is_empty());
        assert_eq!(counters, SessionCounters::new());
    }

    #[test]
    fn custom_separator_width_is_used() {
        let mut interpreter = Interpreter::new(RenderConfig {
            separator_width: 10,
            ..RenderConfig::default()
        });
        let mut counters = SessionCounters::new();
        let output = interpreter.interpret_at(r#"{"type":"result"}"#, &mut counters, at_915());
        assert_eq!(output[1], "==========");
        assert_eq!(output[3], "==========");
    }
}
