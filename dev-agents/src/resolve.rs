//! Resolved queries over a loaded [`Config`].
//!
//! Every value here is a pure function of the config document plus built-in
//! fallbacks. Nothing is cached; callers may call these freely.

use serde::Serialize;

use crate::core::ai::{DEFAULT_INTERACTIVE, DEFAULT_PRINT};
use crate::core::command::{build_command, with_quoted_arg};
use crate::io::config::Config;

/// Fallback PHP binary.
pub const DEFAULT_PHP: &str = "php";
/// Fallback spec language.
pub const DEFAULT_SPEC_LANGUAGE: &str = "en";

/// A lint tool with its runner-wrapped command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintTool {
    pub name: String,
    pub cmd: String,
}

impl Config {
    /// Wrap `raw` in the configured runner template, if any.
    pub fn build_command(&self, raw: &str) -> String {
        build_command(raw, self.runner.as_deref())
    }

    /// Configured lint tools, or `None` to use auto-detection.
    ///
    /// Entries without a `cmd` are dropped. `Some(vec![])` means the project
    /// explicitly configured no tools.
    pub fn lint_tools(&self) -> Option<Vec<LintTool>> {
        let entries = self.lint.as_ref()?;
        let tools = entries
            .iter()
            .filter_map(|entry| {
                let cmd = entry.cmd.as_deref()?;
                Some(LintTool {
                    name: entry.name.clone(),
                    cmd: self.build_command(cmd),
                })
            })
            .collect();
        Some(tools)
    }

    /// PHP binary used for the syntax-check fallback, runner-wrapped.
    pub fn php_binary(&self) -> String {
        self.build_command(self.php.as_deref().unwrap_or(DEFAULT_PHP))
    }

    pub fn spec_language(&self) -> &str {
        self.spec
            .as_ref()
            .and_then(|spec| spec.language.as_deref())
            .unwrap_or(DEFAULT_SPEC_LANGUAGE)
    }

    /// Scope items pre-filled into new task specs.
    pub fn spec_default_scope(&self) -> &[String] {
        self.spec
            .as_ref()
            .and_then(|spec| spec.default_scope.as_deref())
            .unwrap_or(&[])
    }

    /// Non-interactive AI call that prints its response to stdout.
    pub fn ai_print_command(&self, prompt: &str) -> String {
        with_quoted_arg(self.ai_templates().0, prompt)
    }

    /// Interactive AI call that takes over the terminal.
    pub fn ai_interactive_command(&self, prompt: &str) -> String {
        with_quoted_arg(self.ai_templates().1, prompt)
    }

    /// `(print, interactive)` templates for the active backend.
    fn ai_templates(&self) -> (&str, &str) {
        if let Some(preset) = self.ai.preset() {
            return preset;
        }
        let custom = self.ai_commands.as_ref();
        let print = custom
            .and_then(|commands| commands.print.as_deref())
            .unwrap_or(DEFAULT_PRINT);
        let interactive = custom
            .and_then(|commands| commands.interactive.as_deref())
            .unwrap_or(DEFAULT_INTERACTIVE);
        (print, interactive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::config::parse_config;

    fn tool(name: &str, cmd: &str) -> LintTool {
        LintTool {
            name: name.to_string(),
            cmd: cmd.to_string(),
        }
    }

    #[test]
    fn build_command_without_runner_is_identity() {
        let cfg = parse_config(r#"{"php": "php8.2"}"#);
        assert_eq!(cfg.build_command("vendor/bin/phpunit"), "vendor/bin/phpunit");
    }

    #[test]
    fn lint_tools_absent_means_auto_detect() {
        assert_eq!(Config::default().lint_tools(), None);
    }

    #[test]
    fn lint_tools_empty_object_means_no_tools() {
        assert_eq!(parse_config(r#"{"lint": {}}"#).lint_tools(), Some(Vec::new()));
    }

    #[test]
    fn lint_tools_drop_entries_without_cmd_and_keep_order() {
        let cfg = parse_config(
            r#"{"lint": {
                "phpstan": {"cmd": "vendor/bin/phpstan analyse"},
                "psalm": {},
                "phpcs": {"cmd": "vendor/bin/phpcs"}
            }}"#,
        );
        assert_eq!(
            cfg.lint_tools(),
            Some(vec![
                tool("phpstan", "vendor/bin/phpstan analyse"),
                tool("phpcs", "vendor/bin/phpcs"),
            ])
        );
    }

    #[test]
    fn lint_tools_all_without_cmd_is_empty_not_none() {
        let cfg = parse_config(r#"{"lint": {"psalm": {}}}"#);
        assert_eq!(cfg.lint_tools(), Some(Vec::new()));
    }

    #[test]
    fn lint_tools_are_runner_wrapped() {
        let cfg = parse_config(
            r#"{"runner": "make bash cmd=\"{cmd}\"", "lint": {"phpstan": {"cmd": "vendor/bin/phpstan"}}}"#,
        );
        assert_eq!(
            cfg.lint_tools(),
            Some(vec![tool("phpstan", "make bash cmd=\"vendor/bin/phpstan\"")])
        );
    }

    #[test]
    fn php_binary_defaults_and_wraps() {
        assert_eq!(Config::default().php_binary(), "php");
        let cfg = parse_config(r#"{"runner": "docker compose exec app {cmd}", "php": "php8.3"}"#);
        assert_eq!(cfg.php_binary(), "docker compose exec app php8.3");
    }

    #[test]
    fn spec_settings_default() {
        let cfg = Config::default();
        assert_eq!(cfg.spec_language(), "en");
        assert!(cfg.spec_default_scope().is_empty());
    }

    #[test]
    fn spec_settings_from_config() {
        let cfg = parse_config(
            r#"{"spec": {"language": "cs", "default_scope": ["tests", "docs", "tests"]}}"#,
        );
        assert_eq!(cfg.spec_language(), "cs");
        assert_eq!(cfg.spec_default_scope(), ["tests", "docs", "tests"]);
    }

    #[test]
    fn ai_defaults_to_claude() {
        let cfg = Config::default();
        assert_eq!(cfg.ai_print_command("hi there"), "claude --print 'hi there'");
        assert_eq!(cfg.ai_interactive_command("hi"), "claude 'hi'");

        let cfg = parse_config(r#"{"ai": "claude"}"#);
        assert_eq!(cfg.ai_print_command("hi"), "claude --print 'hi'");
    }

    #[test]
    fn ai_codex_preset() {
        let cfg = parse_config(r#"{"ai": "codex", "ai_commands": {"print": "ignored"}}"#);
        assert_eq!(cfg.ai_print_command("hi"), "codex exec 'hi'");
        assert_eq!(cfg.ai_interactive_command("hi"), "codex 'hi'");
    }

    #[test]
    fn ai_custom_commands() {
        let cfg = parse_config(r#"{"ai": "custom", "ai_commands": {"print": "foo"}}"#);
        assert_eq!(cfg.ai_print_command("hi"), "foo 'hi'");
        assert_eq!(cfg.ai_interactive_command("hi"), "claude 'hi'");
    }

    #[test]
    fn ai_unknown_name_behaves_like_custom() {
        let cfg = parse_config(
            r#"{"ai": "gemini", "ai_commands": {"print": "gemini -p", "interactive": "gemini"}}"#,
        );
        assert_eq!(cfg.ai_print_command("go"), "gemini -p 'go'");
        assert_eq!(cfg.ai_interactive_command("go"), "gemini 'go'");

        let bare = parse_config(r#"{"ai": "gemini"}"#);
        assert_eq!(bare.ai_print_command("go"), "claude --print 'go'");
    }

    #[test]
    fn ai_prompt_is_quoted_not_runner_wrapped() {
        let cfg = parse_config(r#"{"runner": "make bash cmd=\"{cmd}\""}"#);
        assert_eq!(
            cfg.ai_print_command("don't stop"),
            "claude --print 'don'\\''t stop'"
        );
    }
}
