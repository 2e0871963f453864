//! Key-value blob persistence.
//!
//! The favorites layer only sees [`KeyValueStore`]; the concrete backend is
//! picked from configuration ([`FileStore`] on disk, [`MemoryStore`] for
//! ephemeral sessions and tests).

mod file;
mod memory;

use std::path::PathBuf;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Persistence collaborator: string blobs addressed by a string key.
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous blob.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Errors that can occur when reading or writing the store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access storage file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage file '{path}' is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to lock storage file '{path}': {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode storage document: {0}")]
    Encode(#[source] serde_json::Error),
}
