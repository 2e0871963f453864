use std::sync::Arc;

use crate::api::{ApiError, MovieSource};
use crate::catalog::{Movie, MovieId};
use crate::ui::catalog::{CatalogIntent, CatalogReducer, CatalogState};
use crate::ui::mvi::Reducer;

/// User-facing message shown when the collection cannot be fetched.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch movies";

/// Fetch the full collection and translate the outcome into a catalog intent.
///
/// The underlying error is logged; the intent only carries the fixed
/// user-facing message.
pub async fn load_catalog(source: &dyn MovieSource) -> CatalogIntent {
    match source.fetch_all().await {
        Ok(movies) => {
            tracing::info!(count = movies.len(), "Catalog loaded");
            CatalogIntent::Loaded { movies }
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to fetch catalog");
            CatalogIntent::Failed {
                message: FETCH_FAILED_MESSAGE.to_string(),
            }
        }
    }
}

/// Owns the authoritative movie collection for a session.
///
/// Loading is never retried on its own; callers decide whether to invoke
/// [`CatalogStore::load`] again after a failure.
pub struct CatalogStore {
    source: Arc<dyn MovieSource>,
    state: CatalogState,
}

impl CatalogStore {
    pub fn new(source: Arc<dyn MovieSource>) -> Self {
        Self {
            source,
            state: CatalogState::default(),
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Fetch the collection and derive the available filter values.
    /// Once loaded, the collection is kept for the session and not refetched.
    pub async fn load(&mut self) -> &CatalogState {
        if self.state.is_loaded() {
            tracing::debug!("Catalog already loaded");
            return &self.state;
        }
        self.dispatch(CatalogIntent::Reload);
        let intent = load_catalog(self.source.as_ref()).await;
        self.dispatch(intent);
        &self.state
    }

    /// Fetch one movie directly from the source. Does not touch the collection.
    pub async fn fetch_by_id(&self, id: MovieId) -> Result<Movie, ApiError> {
        self.source.fetch_by_id(id).await
    }

    fn dispatch(&mut self, intent: CatalogIntent) {
        self.state = CatalogReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
