//! Tool names recognized in build sessions.

// ===== ToolName =====

/// Tool names the renderer knows how to summarize.
///
/// Enumerates the agent tools with dedicated one-line formats, with a
/// fallback variant carrying the raw name for custom or future tools.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ToolName {
    /// Read files from filesystem
    Read,
    /// Write files to filesystem
    Write,
    /// Edit existing files (string replacement)
    Edit,
    /// Execute shell commands
    Bash,
    /// Find files by glob pattern
    Glob,
    /// Search file contents with regex
    Grep,
    /// Invoke a named skill
    Skill,
    /// Add an item to the task list
    TaskCreate,
    /// Change a task's status
    TaskUpdate,
    /// Unknown or custom tool
    Other(String),
}

impl ToolName {
    /// Parse a tool name from the event stream.
    ///
    /// Matching is exact and case-sensitive; anything else lands in `Other`.
    pub fn parse(name: &str) -> Self {
        match name {
            "Read" => Self::Read,
            "Write" => Self::Write,
            "Edit" => Self::Edit,
            "Bash" => Self::Bash,
            "Glob" => Self::Glob,
            "Grep" => Self::Grep,
            "Skill" => Self::Skill,
            "TaskCreate" => Self::TaskCreate,
            "TaskUpdate" => Self::TaskUpdate,
            other => Self::Other(other.to_string()),
        }
    }

    /// Get the canonical string representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Read => "Read",
            Self::Write => "Write",
            Self::Edit => "Edit",
            Self::Bash => "Bash",
            Self::Glob => "Glob",
            Self::Grep => "Grep",
            Self::Skill => "Skill",
            Self::TaskCreate => "TaskCreate",
            Self::TaskUpdate => "TaskUpdate",
            Self::Other(s) => s,
        }
    }
}
