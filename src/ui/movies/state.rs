use std::sync::Arc;

use crate::catalog::{FilterPredicate, Movie, MovieId};
use crate::favorites::Favorites;
use crate::ui::mvi::UiState;

/// Outcome of the last favorites-only toggle, for user feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewSignal {
    FavoritesShown,
    AllShown,
    /// Nothing to show: no movie in the collection is a favorite.
    NoFavorites,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoviesViewState {
    pub collection: Arc<Vec<Movie>>,
    pub predicate: FilterPredicate,
    pub favorites: Favorites,
    /// Ascending positions into `collection`.
    pub view: Vec<usize>,
    pub signal: Option<ViewSignal>,
    /// Set once the persisted favorites have been merged in.
    pub favorites_loaded: bool,
    /// Flags set before the persisted favorites arrived, in toggle order.
    /// Replayed over the loaded map.
    pub pending_edits: Vec<(MovieId, bool)>,
}

impl UiState for MoviesViewState {}

impl MoviesViewState {
    /// Displayed movies in collection order.
    pub fn visible(&self) -> impl Iterator<Item = &Movie> + '_ {
        self.view.iter().filter_map(|&pos| self.collection.get(pos))
    }

    pub fn visible_ids(&self) -> Vec<MovieId> {
        self.visible().map(|m| m.id).collect()
    }

    /// Movie at display row `row`.
    pub fn get(&self, row: usize) -> Option<&Movie> {
        self.view.get(row).and_then(|&pos| self.collection.get(pos))
    }

    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    pub fn is_favorite(&self, id: MovieId) -> bool {
        self.favorites.is_favorite(id)
    }

    /// Number of favorites that are part of the collection.
    pub fn favorite_count(&self) -> usize {
        self.collection
            .iter()
            .filter(|m| self.favorites.is_favorite(m.id))
            .count()
    }

    /// Whether the view looks like the favorites-only list: fewer rows than
    /// the collection, every row a favorite. Derived from content, so a
    /// filter that happens to select only favorites reads the same way.
    pub fn is_showing_only_favorites(&self) -> bool {
        self.view.len() < self.collection.len()
            && self.visible().all(|m| self.favorites.is_favorite(m.id))
    }
}
