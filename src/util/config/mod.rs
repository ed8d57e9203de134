//! Benchmark configuration
//!
//! Read from an optional TOML file; command-line flags override it.
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. Config file (pargraph.toml or --config)
//! 3. Default values
//! ```
//!
//! ```toml
//! source = 0
//! thread_counts = [1, 2, 4, 8]
//! repetitions = 3
//! log_level = "debug"
//!
//! [variants]
//! relax_parallel = false
//! ```

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::logger::LogLevel;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pargraph.toml";

/// Harness settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Source node for every run
    #[serde(default)]
    pub source: usize,
    /// Team sizes swept by the parallel variants
    #[serde(default = "default_thread_counts")]
    pub thread_counts: Vec<usize>,
    /// How many times the whole suite runs
    #[serde(default = "default_repetitions")]
    pub repetitions: usize,
    /// Log verbosity
    #[serde(default)]
    pub log_level: LogLevel,
    /// Which engines to run
    #[serde(default)]
    pub variants: VariantSelection,
}

fn default_thread_counts() -> Vec<usize> {
    vec![1, 2, 4, 8, 16, 32]
}

fn default_repetitions() -> usize {
    1
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            source: 0,
            thread_counts: default_thread_counts(),
            repetitions: default_repetitions(),
            log_level: LogLevel::default(),
            variants: VariantSelection::default(),
        }
    }
}

/// Per-engine switches; everything runs by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantSelection {
    pub dfs: bool,
    pub dfs_parallel: bool,
    pub dfs_parallel_locked: bool,
    pub relax: bool,
    pub relax_parallel: bool,
    pub relax_parallel_locked: bool,
}

impl Default for VariantSelection {
    fn default() -> Self {
        Self {
            dfs: true,
            dfs_parallel: true,
            dfs_parallel_locked: true,
            relax: true,
            relax_parallel: true,
            relax_parallel_locked: true,
        }
    }
}

impl BenchConfig {
    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: BenchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the harness cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.thread_counts.is_empty() {
            return Err(ConfigError::Invalid(
                "thread_counts must not be empty".to_string(),
            ));
        }
        if self.thread_counts.contains(&0) {
            return Err(ConfigError::Invalid(
                "thread_counts entries must be at least 1".to_string(),
            ));
        }
        if self.repetitions == 0 {
            return Err(ConfigError::Invalid(
                "repetitions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Load configuration from `path`.
/// Returns the default config if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<BenchConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => BenchConfig::from_toml_str(&content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BenchConfig::default()),
        Err(e) => Err(ConfigError::Io(e)),
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}
