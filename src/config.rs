//! Heapcount Configuration
//!
//! Handles parsing and management of heapcount.toml configuration files.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// File name searched for by [`HeapcountConfig::find_and_load`].
pub const CONFIG_FILE_NAME: &str = "heapcount.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root configuration structure matching heapcount.toml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HeapcountConfig {
    /// Experiment settings
    #[serde(default)]
    pub experiment: ExperimentConfig,

    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl HeapcountConfig {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: HeapcountConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load configuration from the current directory or parents.
    pub fn load_from_cwd() -> ConfigResult<Self> {
        let cwd = std::env::current_dir()?;
        Self::find_and_load(&cwd)
    }

    /// Find and load configuration by searching up from the given directory.
    pub fn find_and_load(start_dir: &Path) -> ConfigResult<Self> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Self::load(&config_path);
            }
            if !dir.pop() {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(Self::default());
            }
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Experiment loop settings.
///
/// Sizes run are `10^e` for every `e` in `min_exponent..=max_exponent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Smallest size exponent
    #[serde(default = "default_min_exponent")]
    pub min_exponent: u32,

    /// Largest size exponent
    #[serde(default = "default_max_exponent")]
    pub max_exponent: u32,

    /// Trials per size
    #[serde(default = "default_trials")]
    pub trials: usize,

    /// Seed for reproducible runs; fresh randomness when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_min_exponent() -> u32 {
    1
}

fn default_max_exponent() -> u32 {
    6
}

fn default_trials() -> usize {
    14
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            min_exponent: default_min_exponent(),
            max_exponent: default_max_exponent(),
            trials: default_trials(),
            seed: None,
        }
    }
}

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Report output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the count of every trial, not just the summary
    #[serde(default = "default_true")]
    pub show_trials: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_trials: true,
        }
    }
}
