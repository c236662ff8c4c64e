//! Project paths and first-install scaffolding.
//!
//! Every bootstrap step checks for existing files first, so running `init`
//! repeatedly is safe.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use super::config::CONFIG_FILE;

const CONFIG_TEMPLATE: &str = include_str!("../../templates/dev-agents.json");
const PHPSTAN_TEMPLATE: &str = include_str!("../../templates/phpstan.neon");
const PHPCS_TEMPLATE: &str = include_str!("../../templates/phpcs.xml");

/// Block added to the project Makefile.
pub const MAKEFILE_INCLUDE: &str =
    "DA_PHP_PATH ?= php\ninclude vendor/tomashojgr/dev-agents/Makefile.agents";
/// Substring that marks a Makefile as already configured.
const MAKEFILE_MARKER: &str = "Makefile.agents";
/// Executable whose presence on `PATH` is reported by `init`.
pub const AI_CLI: &str = "claude";

/// Lint config templates, written only when the tool is installed.
const LINT_CONFIGS: &[LintConfigTemplate] = &[
    LintConfigTemplate {
        file_name: "phpstan.neon",
        bin: "phpstan",
        contents: PHPSTAN_TEMPLATE,
    },
    LintConfigTemplate {
        file_name: ".phpcs.xml",
        bin: "phpcs",
        contents: PHPCS_TEMPLATE,
    },
];

struct LintConfigTemplate {
    file_name: &'static str,
    bin: &'static str,
    contents: &'static str,
}

/// All canonical paths for a project root.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub tasks_dir: PathBuf,
    pub makefile_path: PathBuf,
    pub vendor_bin_dir: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_path: root.join(CONFIG_FILE),
            tasks_dir: root.join(".tasks"),
            makefile_path: root.join("Makefile"),
            vendor_bin_dir: root.join("vendor").join("bin"),
            root,
        }
    }
}

/// Options for `init_project`.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Rewrite the config and lint templates even if they exist.
    pub force: bool,
}

/// What happened to the Makefile during `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MakefileAction {
    Created,
    IncludeAdded,
    AlreadyConfigured,
}

/// Summary of an `init_project` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub makefile: MakefileAction,
    pub config_written: bool,
    /// File names of lint configs written, in template order.
    pub lint_configs_written: Vec<String>,
    /// Location of the AI CLI, or `None` if it is not on `PATH`. Callers
    /// report the absence; `init_project` does not log it.
    pub ai_cli: Option<PathBuf>,
}

/// Scaffold dev-agents files into `root`.
pub fn init_project(root: &Path, options: &InitOptions) -> Result<InitReport> {
    let paths = ProjectPaths::new(root);

    let ai_cli = find_on_path(AI_CLI, env::var_os("PATH").as_deref());

    let makefile = ensure_makefile(&paths.makefile_path)?;
    let config_written = ensure_config(&paths.config_path, options.force)?;
    let lint_configs_written = ensure_lint_configs(&paths, options.force)?;

    Ok(InitReport {
        makefile,
        config_written,
        lint_configs_written,
        ai_cli,
    })
}

/// Ensure the Makefile includes the dev-agents targets.
pub fn ensure_makefile(path: &Path) -> Result<MakefileAction> {
    if !path.exists() {
        write_file(path, &format!("{MAKEFILE_INCLUDE}\n"))?;
        info!(path = %path.display(), "created Makefile");
        return Ok(MakefileAction::Created);
    }

    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    if contents.contains(MAKEFILE_MARKER) {
        return Ok(MakefileAction::AlreadyConfigured);
    }

    write_file(path, &format!("{MAKEFILE_INCLUDE}\n\n{contents}"))?;
    info!(path = %path.display(), "added include to Makefile");
    Ok(MakefileAction::IncludeAdded)
}

/// Write the default config if missing. Returns whether it was written.
pub fn ensure_config(path: &Path, force: bool) -> Result<bool> {
    if !force && path.exists() {
        return Ok(false);
    }
    write_file(path, CONFIG_TEMPLATE)?;
    info!(path = %path.display(), "wrote config template");
    Ok(true)
}

fn ensure_lint_configs(paths: &ProjectPaths, force: bool) -> Result<Vec<String>> {
    let mut written = Vec::new();
    for template in LINT_CONFIGS {
        let target = paths.root.join(template.file_name);
        if !force && target.exists() {
            continue;
        }
        if !paths.vendor_bin_dir.join(template.bin).exists() {
            continue;
        }
        write_file(&target, template.contents)?;
        info!(path = %target.display(), "wrote lint config template");
        written.push(template.file_name.to_string());
    }
    Ok(written)
}

/// Find `name` as a file in any directory of a `PATH`-style list.
pub fn find_on_path(name: &str, path_var: Option<&OsStr>) -> Option<PathBuf> {
    env::split_paths(path_var?)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("write file {}", path.display()))
}
