//! Daemon configuration loaded from an optional TOML file.
//!
//! Resolution order for every setting is: command-line flag (or its
//! environment variable), then the config file, then the built-in default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DATA_FILE: &str = "data/todo-list.json";
pub const DEFAULT_REQUEST_LOG: &str = "logs/request.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// `[storage]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// JSON file holding the todo list.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

/// `[server]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default)]
    pub addr: Option<String>,
    /// Append-only file receiving one line per request.
    #[serde(default)]
    pub request_log: Option<PathBuf>,
}

/// Top-level config file schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DaemonConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Default location of the config file (`~/.todo-daemon/config.toml`).
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".todo-daemon").join("config.toml"))
}

/// Load the config file at `path`.
///
/// Returns `Ok(DaemonConfig::default())` if the file does not exist.
pub fn load_config(path: &Path) -> Result<DaemonConfig, ConfigError> {
    if !path.exists() {
        debug!("Config not found at {}; using defaults", path.display());
        return Ok(DaemonConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: DaemonConfig = toml::from_str(&content)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Values supplied on the command line, each optional.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub addr: Option<String>,
    pub data_file: Option<PathBuf>,
    pub request_log: Option<PathBuf>,
}

/// Fully resolved settings the daemon runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub addr: String,
    pub data_file: PathBuf,
    pub request_log: PathBuf,
}

impl Settings {
    #[must_use]
    pub fn resolve(overrides: Overrides, file: DaemonConfig) -> Self {
        Self {
            addr: overrides
                .addr
                .or(file.server.addr)
                .unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            data_file: overrides
                .data_file
                .or(file.storage.data_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
            request_log: overrides
                .request_log
                .or(file.server.request_log)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REQUEST_LOG)),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
