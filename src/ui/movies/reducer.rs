use crate::catalog::{FilterPredicate, Movie};
use crate::favorites::Favorites;
use crate::ui::mvi::Reducer;
use crate::ui::movies::intent::MoviesIntent;
use crate::ui::movies::state::{MoviesViewState, ViewSignal};

/// Positions of the movies in `collection` matching `predicate`, in order.
pub fn apply_filters(collection: &[Movie], predicate: &FilterPredicate) -> Vec<usize> {
    collection
        .iter()
        .enumerate()
        .filter(|(_, movie)| predicate.matches(movie))
        .map(|(pos, _)| pos)
        .collect()
}

pub struct MoviesReducer;

impl Reducer for MoviesReducer {
    type State = MoviesViewState;
    type Intent = MoviesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MoviesIntent::Initialize { collection } => MoviesViewState {
                view: (0..collection.len()).collect(),
                collection,
                predicate: FilterPredicate::default(),
                signal: None,
                ..state
            },
            MoviesIntent::FavoritesLoaded { favorites } => merge_loaded(state, favorites),
            MoviesIntent::ApplyFilters { predicate } => {
                let view = apply_filters(&state.collection, &predicate);
                MoviesViewState {
                    predicate,
                    view,
                    ..state
                }
            }
            MoviesIntent::ToggleFavorite { id } => {
                let mut favorites = state.favorites;
                let value = favorites.toggle(id);
                let mut pending_edits = state.pending_edits;
                if !state.favorites_loaded {
                    pending_edits.push((id, value));
                }
                MoviesViewState {
                    favorites,
                    pending_edits,
                    ..state
                }
            }
            MoviesIntent::ToggleShowOnlyFavorites => toggle_show_only_favorites(state),
            MoviesIntent::DismissSignal => MoviesViewState {
                signal: None,
                ..state
            },
        }
    }
}

/// The loaded map wins except for flags the user set before it arrived.
fn merge_loaded(state: MoviesViewState, mut favorites: Favorites) -> MoviesViewState {
    for &(id, value) in &state.pending_edits {
        favorites.set(id, value);
    }
    MoviesViewState {
        favorites,
        favorites_loaded: true,
        pending_edits: Vec::new(),
        ..state
    }
}

/// Decided from what is on screen, not from a stored mode flag.
///
/// Turning it off restores the unfiltered collection; the stored predicate is
/// left untouched but no longer applied until the next `ApplyFilters`.
fn toggle_show_only_favorites(state: MoviesViewState) -> MoviesViewState {
    if state.is_showing_only_favorites() {
        return MoviesViewState {
            view: (0..state.collection.len()).collect(),
            signal: Some(ViewSignal::AllShown),
            ..state
        };
    }

    let favorite_positions: Vec<usize> = state
        .collection
        .iter()
        .enumerate()
        .filter(|(_, movie)| state.favorites.is_favorite(movie.id))
        .map(|(pos, _)| pos)
        .collect();

    if favorite_positions.is_empty() {
        return MoviesViewState {
            signal: Some(ViewSignal::NoFavorites),
            ..state
        };
    }

    MoviesViewState {
        view: favorite_positions,
        signal: Some(ViewSignal::FavoritesShown),
        ..state
    }
}
