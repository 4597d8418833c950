use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Config file picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "bibleref.yaml";
/// Dataset location used when neither the CLI nor the config names one.
pub const DEFAULT_QUESTIONS_PATH: &str = "app/assets/questions-nl-sv.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckerConfig {
    #[serde(default)]
    pub questions: Option<String>,
    /// Source file of the canonical mapper; checked for presence when set.
    #[serde(default)]
    pub mapper: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(String),
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum MapperError {
    #[error("Mapper file not found: {0}")]
    NotFound(String),
}

/// Read and validate a YAML config file.
pub fn load_config(path: &Path) -> Result<CheckerConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;
    parse_config(&raw)
}

pub fn parse_config(raw: &str) -> Result<CheckerConfig, ConfigError> {
    // An empty document is a valid, empty config.
    if raw.trim().is_empty() {
        return Ok(CheckerConfig::default());
    }
    let cfg: CheckerConfig = serde_yaml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;

    for (field, value) in [("questions", &cfg.questions), ("mapper", &cfg.mapper)] {
        if matches!(value, Some(v) if v.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("{} must not be empty", field)));
        }
    }
    Ok(cfg)
}

impl CheckerConfig {
    pub fn questions_path(&self) -> PathBuf {
        PathBuf::from(self.questions.as_deref().unwrap_or(DEFAULT_QUESTIONS_PATH))
    }

    pub fn mapper_path(&self) -> Option<PathBuf> {
        self.mapper.as_deref().map(PathBuf::from)
    }
}

/// Refuse to run when the configured canonical mapper source is gone.
pub fn check_mapper(path: &Path) -> Result<(), MapperError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(MapperError::NotFound(path.display().to_string()))
    }
}
