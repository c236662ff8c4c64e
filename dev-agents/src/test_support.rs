//! Test-only helpers for building throwaway projects on disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::io::init::ProjectPaths;
use crate::io::task_store::task_path;

/// A temporary project root with helpers for config and task documents.
pub struct TestProject {
    dir: TempDir,
    pub paths: ProjectPaths,
}

impl TestProject {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp project")?;
        let paths = ProjectPaths::new(dir.path());
        Ok(Self { dir, paths })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `.dev-agents.json` verbatim.
    pub fn write_config(&self, contents: &str) -> Result<()> {
        fs::write(&self.paths.config_path, contents)
            .with_context(|| format!("write {}", self.paths.config_path.display()))
    }

    /// Write `.tasks/<id>/TASK.md`.
    pub fn write_task(&self, id: &str, contents: &str) -> Result<()> {
        let path = task_path(&self.paths.tasks_dir, id);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))
    }
}

/// A minimal task document with the given fields.
pub fn task_doc(status: &str, goal: &str, scope: &[&str]) -> String {
    let mut doc = format!("status: {status}\n\n## Goal\n{goal}\n\n## Scope\n");
    for item in scope {
        doc.push_str(&format!("- `{item}`\n"));
    }
    doc
}
