//! Project configuration stored in `.dev-agents.json`.
//!
//! Loading never fails. A missing file, unreadable file, invalid JSON, or a
//! document that is not an object all yield [`Config::default()`], so every
//! accessor returns its fallback. A field with the wrong JSON type is treated
//! as absent without affecting its siblings. Unknown keys are ignored.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

use super::init::ProjectPaths;
use crate::core::ai::AiBackend;

/// File name of the configuration document in the project root.
pub const CONFIG_FILE: &str = ".dev-agents.json";

/// Parsed project configuration. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wrapper template containing `{cmd}`.
    #[serde(deserialize_with = "lenient")]
    pub runner: Option<String>,

    /// Selected AI preset; absent means Claude.
    #[serde(deserialize_with = "deserialize_backend")]
    pub ai: AiBackend,

    /// Commands used when `ai` selects the custom backend.
    #[serde(deserialize_with = "lenient")]
    pub ai_commands: Option<AiCommands>,

    /// PHP binary for the syntax-check fallback.
    #[serde(deserialize_with = "lenient")]
    pub php: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub spec: Option<SpecConfig>,

    /// Lint tools in document order. `None` means the key was absent and
    /// callers should auto-detect tools.
    #[serde(deserialize_with = "deserialize_lint")]
    pub lint: Option<Vec<LintEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AiCommands {
    #[serde(deserialize_with = "lenient")]
    pub print: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub interactive: Option<String>,
}

/// Settings for task spec generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpecConfig {
    #[serde(deserialize_with = "lenient")]
    pub language: Option<String>,
    /// Scope items pre-filled into new task specs.
    #[serde(deserialize_with = "lenient")]
    pub default_scope: Option<Vec<String>>,
}

/// One configured lint tool, before runner wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintEntry {
    pub name: String,
    /// `None` when the entry has no string `cmd`; such entries are skipped.
    pub cmd: Option<String>,
}

/// Load configuration from `<root>/.dev-agents.json`.
pub fn load_config(root: &Path) -> Config {
    let path = ProjectPaths::new(root).config_path;
    match fs::read_to_string(&path) {
        Ok(contents) => {
            debug!(path = %path.display(), "loading config");
            parse_config(&contents)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            Config::default()
        }
        Err(err) => {
            warn!(path = %path.display(), err = %err, "config unreadable, using defaults");
            Config::default()
        }
    }
}

/// Parse a configuration document. Invalid input yields the default config.
pub fn parse_config(contents: &str) -> Config {
    let value: Value = match serde_json::from_str(contents) {
        Ok(value) => value,
        Err(err) => {
            warn!(err = %err, "config is not valid JSON, using defaults");
            return Config::default();
        }
    };
    if !value.is_object() {
        warn!("config is not a JSON object, using defaults");
        return Config::default();
    }
    serde_json::from_value(value).unwrap_or_else(|err| {
        warn!(err = %err, "config could not be read, using defaults");
        Config::default()
    })
}

/// Deserialize `T`, mapping a type mismatch (or `null`) to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn deserialize_backend<'de, D>(deserializer: D) -> Result<AiBackend, D::Error>
where
    D: Deserializer<'de>,
{
    let name: Option<String> = lenient(deserializer)?;
    Ok(AiBackend::from_name(name.as_deref()))
}

fn deserialize_lint<'de, D>(deserializer: D) -> Result<Option<Vec<LintEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(tools) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    let entries = tools
        .into_iter()
        .map(|(name, def)| LintEntry {
            cmd: def.get("cmd").and_then(Value::as_str).map(str::to_string),
            name,
        })
        .collect();
    Ok(Some(entries))
}
