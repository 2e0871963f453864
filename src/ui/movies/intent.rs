use std::sync::Arc;

use crate::catalog::{FilterPredicate, Movie, MovieId};
use crate::favorites::Favorites;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum MoviesIntent {
    /// Catalog arrived: show everything, reset the predicate. Favorites are kept.
    Initialize { collection: Arc<Vec<Movie>> },
    /// Persisted favorites finished loading. Flags set earlier are reapplied on top.
    FavoritesLoaded { favorites: Favorites },
    /// Replace the predicate and recompute the view.
    ApplyFilters { predicate: FilterPredicate },
    /// Flip one movie's favorite flag. The caller persists the snapshot afterwards.
    ToggleFavorite { id: MovieId },
    /// Switch between the favorites-only list and the full collection.
    ToggleShowOnlyFavorites,
    /// The UI has shown the last signal.
    DismissSignal,
}

impl Intent for MoviesIntent {}
