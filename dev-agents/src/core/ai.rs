//! AI backend presets.

/// Print template used when no preset or custom command applies.
pub const DEFAULT_PRINT: &str = "claude --print";
/// Interactive template used when no preset or custom command applies.
pub const DEFAULT_INTERACTIVE: &str = "claude";

/// Which AI command-line tool drives the agent.
///
/// Any name other than `claude` or `codex` selects [`AiBackend::Custom`], so
/// unknown preset names fall back to the `ai_commands` block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AiBackend {
    #[default]
    Claude,
    Codex,
    Custom,
}

impl AiBackend {
    /// Map the configured `ai` value to a backend. `None` is the default preset.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            None | Some("claude") => Self::Claude,
            Some("codex") => Self::Codex,
            Some(_) => Self::Custom,
        }
    }

    /// Built-in `(print, interactive)` templates, or `None` for `Custom`.
    pub fn preset(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Claude => Some((DEFAULT_PRINT, DEFAULT_INTERACTIVE)),
            Self::Codex => Some(("codex exec", "codex")),
            Self::Custom => None,
        }
    }
}
