//! Favorites set and its write-through persistence.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::MovieId;
use crate::storage::{KeyValueStore, StorageError};

/// Storage key the favorites blob lives under unless configured otherwise.
pub const DEFAULT_FAVORITES_KEY: &str = "favorites";

/// Sparse movie id -> favorite map. Absent ids are not favorites.
///
/// Serialized as a JSON object keyed by the decimal id, e.g. `{"2":true,"5":false}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(BTreeMap<MovieId, bool>);

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_favorite(&self, id: MovieId) -> bool {
        self.0.get(&id).copied().unwrap_or(false)
    }

    /// Flip the flag for `id` and return the new value.
    pub fn toggle(&mut self, id: MovieId) -> bool {
        let value = !self.is_favorite(id);
        self.0.insert(id, value);
        value
    }

    pub fn set(&mut self, id: MovieId, value: bool) {
        self.0.insert(id, value);
    }

    /// True if any id is marked favorite.
    pub fn any(&self) -> bool {
        self.0.values().any(|v| *v)
    }

    /// Number of ids currently marked favorite.
    pub fn count(&self) -> usize {
        self.0.values().filter(|v| **v).count()
    }

    /// Ids marked favorite, ascending.
    pub fn ids(&self) -> impl Iterator<Item = MovieId> + '_ {
        self.0.iter().filter(|(_, v)| **v).map(|(id, _)| *id)
    }

    pub fn from_json(blob: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(blob)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl FromIterator<MovieId> for Favorites {
    fn from_iter<I: IntoIterator<Item = MovieId>>(iter: I) -> Self {
        Self(iter.into_iter().map(|id| (id, true)).collect())
    }
}

/// Errors from writing the favorites snapshot.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Failed to encode favorites: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Reads and writes the favorites blob under a fixed key.
#[derive(Clone)]
pub struct FavoritesRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl FavoritesRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persisted favorites.
    ///
    /// Never fails: an absent blob, a read error and a malformed blob all
    /// produce an empty set. Problems are logged at warn level.
    pub fn load(&self) -> Favorites {
        let blob = match self.store.get(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return Favorites::default(),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "Failed to read favorites; starting empty");
                return Favorites::default();
            }
        };

        match Favorites::from_json(&blob) {
            Ok(favorites) => {
                tracing::debug!(count = favorites.count(), "Favorites loaded");
                favorites
            }
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "Malformed favorites blob; starting empty");
                Favorites::default()
            }
        }
    }

    /// Write the full snapshot, replacing whatever was stored before.
    pub fn persist(&self, snapshot: &Favorites) -> Result<(), PersistError> {
        let blob = snapshot.to_json()?;
        self.store.set(&self.key, &blob)?;
        tracing::debug!(count = snapshot.count(), "Favorites persisted");
        Ok(())
    }
}
