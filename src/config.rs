use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::glossary::Traversal;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TermbankConfig {
    pub database: Option<String>,
    pub input_dir: Option<String>,
    pub pattern: Option<String>,
    pub single_visit: Option<bool>,
}

/// Settings after flags, config file and defaults are merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database: PathBuf,
    pub input_dir: PathBuf,
    pub pattern: String,
    pub traversal: Traversal,
}

/// Command-line overrides; `None` falls through to the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub database: Option<PathBuf>,
    pub input_dir: Option<PathBuf>,
    pub pattern: Option<String>,
    pub single_visit: bool,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("termbank.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<TermbankConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: TermbankConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

impl Settings {
    /// Merge overrides over the config file over built-in defaults
    pub fn resolve(overrides: Overrides, config: Option<TermbankConfig>) -> Self {
        let config = config.unwrap_or_default();
        let single_visit = overrides.single_visit || config.single_visit.unwrap_or(false);

        Self {
            database: overrides
                .database
                .or_else(|| config.database.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(crate::DEFAULT_DATABASE)),
            input_dir: overrides
                .input_dir
                .or_else(|| config.input_dir.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(".")),
            pattern: overrides
                .pattern
                .or(config.pattern)
                .unwrap_or_else(|| crate::DEFAULT_PATTERN.to_string()),
            traversal: if single_visit {
                Traversal::SingleVisit
            } else {
                Traversal::RevisitItems
            },
        }
    }
}
