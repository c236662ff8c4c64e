//! Line tokenizer for task specification documents.
//!
//! Recognized structure:
//!
//! ```text
//! status: <status-keyword>
//!
//! ## Goal
//! <free text>
//!
//! ## Scope
//! - item one
//! - `item two`
//! ```
//!
//! Parsing is total. Each field is extracted independently and keeps its
//! default when its part of the document is missing or malformed.

use crate::task::Task;

const STATUS_KEY: &str = "status:";
const HEADING: &str = "##";
const GOAL_HEADING: &str = "Goal";
const SCOPE_HEADING: &str = "Scope";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Goal,
    Scope,
    /// Preamble, unknown sections, and repeated Goal/Scope sections.
    Other,
}

/// Parse a task document. The returned task has an empty `id`.
pub fn parse_task(text: &str) -> Task {
    let mut task = Task::empty(text);
    let mut status: Option<&str> = None;
    let mut goal_lines: Vec<&str> = Vec::new();
    let mut seen_goal = false;
    let mut seen_scope = false;
    let mut section = Section::Other;

    for line in text.lines() {
        if status.is_none() {
            status = parse_status(line);
        }

        // Any line opening with `##` closes the current section, including
        // deeper headings such as `### Notes`.
        if let Some(title) = line.strip_prefix(HEADING) {
            section = match title.trim() {
                GOAL_HEADING if !seen_goal => {
                    seen_goal = true;
                    Section::Goal
                }
                SCOPE_HEADING if !seen_scope => {
                    seen_scope = true;
                    Section::Scope
                }
                _ => Section::Other,
            };
            continue;
        }

        match section {
            Section::Goal => goal_lines.push(line),
            Section::Scope => task.scope.extend(parse_scope_item(line)),
            Section::Other => {}
        }
    }

    if let Some(status) = status {
        task.status = status.to_string();
    }
    task.goal = goal_lines.join("\n").trim().to_string();
    task
}

/// `status: <value>` at the start of a line. An empty value does not count.
fn parse_status(line: &str) -> Option<&str> {
    let value = line.strip_prefix(STATUS_KEY)?.trim();
    (!value.is_empty()).then_some(value)
}

/// A `-` or `*` bullet at the start of a line.
///
/// One pair of backticks around the item is stripped; text after the closing
/// backtick is dropped.
fn parse_scope_item(line: &str) -> Option<String> {
    let rest = line
        .strip_prefix('-')
        .or_else(|| line.strip_prefix('*'))?
        .trim_start();
    let rest = rest.strip_prefix('`').unwrap_or(rest);
    let item = rest.split('`').next().unwrap_or_default().trim_end();
    (!item.is_empty()).then(|| item.to_string())
}
