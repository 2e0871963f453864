//! JSON-document store on local disk.
//!
//! All keys live in one JSON object (`{"favorites": "{\"2\":true}"}`).
//! Writes take an exclusive `fs2` lock on a sidecar `.lock` file, rewrite the
//! whole document into a temp file and rename it over the original, so a
//! crash mid-write never leaves a truncated document behind.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::storage::{KeyValueStore, StorageError};

type Document = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.local/share/cinelist/storage.json` on Linux, or the platform
    /// equivalent via `dirs::data_dir()`. Falls back to the current directory.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("cinelist").join("storage.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        sibling_with_suffix(&self.path, ".lock")
    }

    fn temp_path(&self) -> PathBuf {
        sibling_with_suffix(&self.path, ".tmp")
    }

    fn read_document(&self) -> Result<Document, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Document::new());
        }

        serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            source: e,
        })
    }

    fn write_document(&self, document: &Document) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(document).map_err(StorageError::Encode)?;
        let temp_path = self.temp_path();

        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| StorageError::Io { path, source }
        };

        let mut file = File::create(&temp_path).map_err(io_err(&temp_path))?;
        file.write_all(content.as_bytes()).map_err(io_err(&temp_path))?;
        file.sync_all().map_err(io_err(&temp_path))?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(io_err(&self.path))
    }

    /// Exclusive lock held for the duration of a read-modify-write cycle.
    /// Released when the returned file is dropped.
    fn lock(&self) -> Result<File, StorageError> {
        let lock_path = self.lock_path();
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| StorageError::Lock {
                path: lock_path.clone(),
                source: e,
            })?;
        FileExt::lock_exclusive(&file).map_err(|e| StorageError::Lock {
            path: lock_path,
            source: e,
        })?;
        Ok(file)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_document()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let _lock = self.lock()?;

        let mut document = match self.read_document() {
            Ok(document) => document,
            Err(StorageError::Corrupt { path, source }) => {
                tracing::warn!(path = %path.display(), error = %source, "Replacing corrupt storage file");
                Document::new()
            }
            Err(e) => return Err(e),
        };

        document.insert(key.to_string(), value.to_string());
        self.write_document(&document)
    }
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}
