use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::options::DenoOptions;

/// File names searched for script configuration, in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &["denox.yml", "denox.yaml"];

/// Root structure of a denox config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DenoxConfig {
    /// Options applied to every script. A script-level entry for the same
    /// option wins.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub deno_options: DenoOptions,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub scripts: IndexMap<String, ScriptConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    /// Entry point passed to `deno run`.
    pub file: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Fixed arguments appended after the entry point.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub deno_options: DenoOptions,
}

/// Locate the config file in `dir`, trying `denox.yml` then `denox.yaml`.
pub fn find_config(dir: &Path) -> Result<PathBuf> {
    for name in CONFIG_FILE_NAMES {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(Error::config_not_found(
        dir.display().to_string(),
        CONFIG_FILE_NAMES.iter().map(|n| n.to_string()).collect(),
    ))
}

pub fn load(path: &Path) -> Result<DenoxConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("read {}", path.display())))
    })?;

    from_str(&content, path)
}

pub(crate) fn from_str(content: &str, path: &Path) -> Result<DenoxConfig> {
    serde_yml::from_str(content)
        .map_err(|e| Error::config_invalid_yaml(path.display().to_string(), e.to_string()))
}

impl DenoxConfig {
    pub fn script(&self, name: &str) -> Result<&ScriptConfig> {
        self.scripts
            .get(name)
            .ok_or_else(|| Error::script_not_found(name))
    }

    /// Effective options for one script: file-level entries first, then the
    /// script's own. An override keeps the file-level position but takes the
    /// script-level value.
    pub fn options_for(&self, script: &ScriptConfig) -> DenoOptions {
        let mut merged = self.deno_options.clone();

        for (name, value) in &script.deno_options {
            merged.insert(name.clone(), value.clone());
        }

        merged
    }
}
