use serde::{Deserialize, Serialize};

/// Status assigned to documents without a `status:` line.
pub const DEFAULT_STATUS: &str = "draft";

/// One task specification document, parsed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Name of the task's directory; not stored in the document.
    pub id: String,
    pub status: String,
    pub goal: String,
    pub scope: Vec<String>,
    /// Original document text, verbatim.
    pub raw: String,
}

impl Task {
    /// A task with every field at its default, holding `raw`.
    pub fn empty(raw: &str) -> Self {
        Self {
            id: String::new(),
            status: DEFAULT_STATUS.to_string(),
            goal: String::new(),
            scope: Vec::new(),
            raw: raw.to_string(),
        }
    }
}
