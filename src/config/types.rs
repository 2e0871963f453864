use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::favorites::DEFAULT_FAVORITES_KEY;
use crate::storage::FileStore;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Movies API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Collection endpoint (e.g., "http://localhost:3001/movies").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Where favorites are persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage file path. `~/` is expanded; `:memory:` keeps data in-process.
    /// Defaults to the platform data directory.
    #[serde(default)]
    pub path: Option<String>,
    /// Key the favorites blob is stored under.
    #[serde(default = "default_favorites_key")]
    pub favorites_key: String,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// EnvFilter directive used when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the terminal UI. Without it the UI does not log.
    #[serde(default)]
    pub file: Option<String>,
}

/// Resolved storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    Memory,
    File(PathBuf),
}

pub const MEMORY_STORAGE: &str = ":memory:";

impl StorageConfig {
    pub fn location(&self) -> StorageLocation {
        match self.path.as_deref() {
            Some(MEMORY_STORAGE) => StorageLocation::Memory,
            Some(path) => StorageLocation::File(expand_tilde(path)),
            None => StorageLocation::File(FileStore::default_path()),
        }
    }
}

impl LoggingConfig {
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file.as_deref().map(expand_tilde)
    }
}

/// Expand a leading `~/` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn default_base_url() -> String {
    "http://localhost:3001/movies".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_favorites_key() -> String {
    DEFAULT_FAVORITES_KEY.to_string()
}

fn default_tick_rate() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            favorites_key: default_favorites_key(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
