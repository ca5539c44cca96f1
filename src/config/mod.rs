//! Configuration module.
//!
//! buildlog has no runtime configuration surface: no flags, no config file.
//! The rendering constants are gathered here so the interpreter is built from
//! one value instead of scattered literals.

/// Rendering settings for the build log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Width of the separator lines framing the final summary.
    pub separator_width: usize,

    /// Character repeated to draw separator lines.
    pub separator_char: char,

    /// Maximum characters of a Bash command shown when it has no description.
    ///
    /// Longer commands are cut to this many characters and suffixed with `...`.
    pub bash_preview_chars: usize,

    /// Stand-in for tool parameters the agent did not send.
    pub placeholder: &'static str,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            separator_width: 50,
            separator_char: '=',
            bash_preview_chars: 80,
            placeholder: "?",
        }
    }
}

impl RenderConfig {
    /// The separator line framing the final summary.
    pub fn separator(&self) -> String {
        std::iter::repeat(self.separator_char)
            .take(self.separator_width)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_log_format() {
        let config = RenderConfig::default();
        assert_eq!(config.separator_width, 50);
        assert_eq!(config.separator_char, '=');
        assert_eq!(config.bash_preview_chars, 80);
        assert_eq!(config.placeholder, "?");
    }

    #[test]
    fn separator_repeats_char_to_width() {
        let separator = RenderConfig::default().separator();
        assert_eq!(separator.chars().count(), 50);
        assert!(separator.chars().all(|c| c == '='));
    }

    #[test]
    fn separator_honors_custom_width() {
        let config = RenderConfig {
            separator_width: 3,
            separator_char: '-',
            ..RenderConfig::default()
        };
        assert_eq!(config.separator(), "---");
    }
}
