mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    expand_tilde, ApiConfig, Config, LoggingConfig, StorageConfig, StorageLocation, UiConfig,
    MEMORY_STORAGE,
};
