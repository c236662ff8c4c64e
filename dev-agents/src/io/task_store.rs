//! Task documents on disk: `<tasks_dir>/<id>/TASK.md`.
//!
//! Every call re-reads and re-parses; there is no cache.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use thiserror::Error;
use tracing::debug;

use crate::core::task_parser::parse_task;
use crate::task::Task;

/// Fixed file name of a task document inside its directory.
pub const TASK_FILE: &str = "TASK.md";

/// No document exists for the requested task id.
///
/// Returned inside [`anyhow::Error`]; use `downcast_ref` to detect it.
#[derive(Debug, Error)]
#[error("task not found: {id} (expected {})", .path.display())]
pub struct TaskNotFound {
    pub id: String,
    pub path: PathBuf,
}

/// Path of the document for task `id`.
pub fn task_path(tasks_dir: &Path, id: &str) -> PathBuf {
    tasks_dir.join(id).join(TASK_FILE)
}

/// Load one task by id.
///
/// Fails with [`TaskNotFound`] if the document does not exist.
pub fn load_task(tasks_dir: &Path, id: &str) -> Result<Task> {
    validate_task_id(id)?;
    let path = task_path(tasks_dir, id);
    if !path.is_file() {
        return Err(TaskNotFound {
            id: id.to_string(),
            path,
        }
        .into());
    }
    read_task(&path, id)
}

/// Load every task under `tasks_dir`, keyed by id.
///
/// A missing `tasks_dir`, or one that is not a directory, yields an empty map. Map order is unspecified; sort
/// by id when order matters.
pub fn load_all_tasks(tasks_dir: &Path) -> Result<HashMap<String, Task>> {
    let entries = match fs::read_dir(tasks_dir) {
        Ok(entries) => entries,
        Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            debug!(dir = %tasks_dir.display(), "no tasks directory");
            return Ok(HashMap::new());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("read directory {}", tasks_dir.display()));
        }
    };

    let mut tasks = HashMap::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read directory {}", tasks_dir.display()))?;
        let Ok(id) = entry.file_name().into_string() else {
            continue;
        };
        if id.starts_with('.') {
            continue;
        }
        let path = entry.path().join(TASK_FILE);
        if !path.is_file() {
            continue;
        }
        let task = read_task(&path, &id)?;
        tasks.insert(id, task);
    }
    debug!(dir = %tasks_dir.display(), count = tasks.len(), "loaded tasks");
    Ok(tasks)
}

/// Reject ids that would resolve outside their own directory.
pub fn validate_task_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(anyhow!("invalid task id: must not be empty"));
    }
    if id == "." || id == ".." {
        return Err(anyhow!("invalid task id '{id}'"));
    }
    if id.contains('/') || id.contains('\\') {
        return Err(anyhow!("invalid task id '{id}': must not contain a path separator"));
    }
    Ok(())
}

fn read_task(path: &Path, id: &str) -> Result<Task> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let mut task = parse_task(&String::from_utf8_lossy(&bytes));
    task.id = id.to_string();
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_task(tasks_dir: &Path, id: &str, contents: &str) {
        let dir = tasks_dir.join(id);
        fs::create_dir_all(&dir).expect("create task dir");
        fs::write(dir.join(TASK_FILE), contents).expect("write task");
    }

    #[test]
    fn load_task_parses_and_sets_id() {
        let temp = tempfile::tempdir().expect("tempdir");
        write_task(temp.path(), "42-retry", "status: ready\n## Goal\nRetry\n");

        let task = load_task(temp.path(), "42-retry").expect("load");
        assert_eq!(task.id, "42-retry");
        assert_eq!(task.status, "ready");
        assert_eq!(task.goal, "Retry");
    }

    #[test]
    fn load_task_missing_is_not_found() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = load_task(temp.path(), "nope").unwrap_err();
        let not_found = err.downcast_ref::<TaskNotFound>().expect("TaskNotFound");
        assert_eq!(not_found.id, "nope");
        assert_eq!(not_found.path, task_path(temp.path(), "nope"));
    }

    #[test]
    fn load_task_directory_without_document_is_not_found() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(temp.path().join("empty")).expect("mkdir");
        let err = load_task(temp.path(), "empty").unwrap_err();
        assert!(err.downcast_ref::<TaskNotFound>().is_some());
    }

    #[test]
    fn load_task_rejects_path_ids() {
        let temp = tempfile::tempdir().expect("tempdir");
        for id in ["", ".", "..", "../x", "a/b"] {
            let err = load_task(temp.path(), id).unwrap_err();
            assert!(err.downcast_ref::<TaskNotFound>().is_none(), "id {id:?}");
            assert!(err.to_string().contains("invalid task id"), "id {id:?}");
        }
    }

    #[test]
    fn load_task_rereads_on_every_call() {
        let temp = tempfile::tempdir().expect("tempdir");
        write_task(temp.path(), "t", "status: draft\n");
        assert_eq!(load_task(temp.path(), "t").expect("load").status, "draft");

        write_task(temp.path(), "t", "status: done\n");
        assert_eq!(load_task(temp.path(), "t").expect("reload").status, "done");
    }

    #[test]
    fn load_all_missing_dir_is_empty() {
        let temp = tempfile::tempdir().expect("tempdir");
        let tasks = load_all_tasks(&temp.path().join("missing")).expect("load all");
        assert!(tasks.is_empty());
    }

    #[test]
    fn load_all_tasks_path_that_is_a_file_is_empty() {
        let temp = tempfile::tempdir().expect("tempdir");
        let tasks_dir = temp.path().join(".tasks");
        fs::write(&tasks_dir, "").expect("write file");

        let tasks = load_all_tasks(&tasks_dir).expect("load all");
        assert!(tasks.is_empty());
    }

    #[test]
    fn load_all_finds_task_directories_only() {
        let temp = tempfile::tempdir().expect("tempdir");
        write_task(temp.path(), "b", "status: done\n");
        write_task(temp.path(), "a", "## Scope\n- x\n");
        write_task(temp.path(), ".hidden", "status: done\n");
        fs::create_dir_all(temp.path().join("no-doc")).expect("mkdir");
        fs::write(temp.path().join("TASK.md"), "status: stray\n").expect("write stray");

        let tasks = load_all_tasks(temp.path()).expect("load all");
        let mut ids: Vec<&str> = tasks.keys().map(String::as_str).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(tasks["a"].id, "a");
        assert_eq!(tasks["a"].status, "draft");
        assert_eq!(tasks["a"].scope, vec!["x"]);
        assert_eq!(tasks["b"].status, "done");
    }

    #[test]
    fn invalid_utf8_still_parses() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = temp.path().join("bin");
        fs::create_dir_all(&dir).expect("mkdir");
        fs::write(dir.join(TASK_FILE), b"status: ok\n\xff\xfe\n").expect("write");

        let task = load_task(temp.path(), "bin").expect("load");
        assert_eq!(task.status, "ok");
    }
}
