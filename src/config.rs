//! Configuration.
//!
//! The CLI takes only the two directories. Everything else has a stock
//! default that reproduces the fixed behavior (`convert`, `2x2@`, PNG tiles,
//! one worker per core). Those defaults can be overridden by a TOML file
//! named in the `QUADSPLIT_CONFIG` environment variable:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! tool = "convert"          # ImageMagick executable, resolved via PATH
//! format = "png"            # Tile file extension
//! grid = [2, 2]             # [columns, rows]
//!
//! [processing]
//! max_processes = 4         # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! Config files are sparse. Unknown keys are rejected to catch typos early.

use crate::imaging::Grid;
use crate::imaging::magick::DEFAULT_PROGRAM;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an optional config file.
pub const CONFIG_ENV: &str = "QUADSPLIT_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Batch settings. All fields have defaults matching the built-in behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitConfig {
    /// External crop executable.
    pub tool: String,
    /// Extension (and therefore encoding) of the written tiles.
    pub format: String,
    /// Tile grid as `[columns, rows]`.
    pub grid: Grid,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            tool: DEFAULT_PROGRAM.to_string(),
            format: "png".to_string(),
            grid: Grid::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl SplitConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tool.trim().is_empty() {
            return Err(ConfigError::Validation("tool must not be empty".into()));
        }
        if self.format.is_empty() || !self.format.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::Validation(format!(
                "format must be a plain extension like \"png\", got {:?}",
                self.format
            )));
        }
        if self.grid.columns == 0 || self.grid.rows == 0 {
            return Err(ConfigError::Validation(
                "grid values must be non-zero".into(),
            ));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel crop workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective worker count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.min(cores))
        .unwrap_or(cores)
        .max(1)
}

/// Parse and validate a config file.
pub fn load_config(path: &Path) -> Result<SplitConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: SplitConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load `path` if given, otherwise return the stock defaults.
pub fn load_optional(path: Option<&Path>) -> Result<SplitConfig, ConfigError> {
    match path {
        Some(p) => load_config(p),
        None => Ok(SplitConfig::default()),
    }
}

/// Config file path from [`CONFIG_ENV`], ignoring an empty value.
pub fn config_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
