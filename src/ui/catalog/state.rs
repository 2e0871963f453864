use std::sync::Arc;

use crate::catalog::{AvailableFilters, Movie};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Loaded {
        movies: Arc<Vec<Movie>>,
        filters: AvailableFilters,
    },
    Failed {
        message: String,
    },
}

impl UiState for CatalogState {}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The collection; empty unless loaded.
    pub fn movies(&self) -> &[Movie] {
        match self {
            Self::Loaded { movies, .. } => movies.as_slice(),
            _ => &[],
        }
    }

    /// Shared handle to the collection, for the view reducer.
    pub fn shared_movies(&self) -> Option<Arc<Vec<Movie>>> {
        match self {
            Self::Loaded { movies, .. } => Some(Arc::clone(movies)),
            _ => None,
        }
    }

    pub fn filters(&self) -> Option<&AvailableFilters> {
        match self {
            Self::Loaded { filters, .. } => Some(filters),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_is_default() {
        assert_eq!(CatalogState::default(), CatalogState::Loading);
    }

    #[test]
    fn failed_exposes_no_movies() {
        let state = CatalogState::Failed {
            message: "boom".to_string(),
        };
        assert!(state.movies().is_empty());
        assert!(state.filters().is_none());
        assert_eq!(state.error_message(), Some("boom"));
    }
}
