mod common;

use cinelist::catalog::{FilterPredicate, RatingBucket};
use cinelist::ui::movies::{apply_filters, MoviesIntent, MoviesReducer, MoviesViewState, ViewSignal};
use cinelist::ui::mvi::Reducer;
use common::*;
use std::sync::Arc;

fn reduce(state: MoviesViewState, intent: MoviesIntent) -> MoviesViewState {
    MoviesReducer::reduce(state, intent)
}

fn filtered(state: MoviesViewState, predicate: FilterPredicate) -> MoviesViewState {
    reduce(state, MoviesIntent::ApplyFilters { predicate })
}

fn predicates() -> Vec<FilterPredicate> {
    vec![
        FilterPredicate::default(),
        FilterPredicate::default().with_year("2010"),
        FilterPredicate::default()
            .with_year("2010")
            .with_year("2014"),
        FilterPredicate::default().with_director("Christopher Nolan"),
        FilterPredicate::default().with_rating(RatingBucket::EightPlus),
        FilterPredicate::default()
            .with_rating(RatingBucket::NinePlus)
            .with_rating(RatingBucket::SevenPlus),
        FilterPredicate::default()
            .with_year("2010")
            .with_director("Martin Scorsese")
            .with_rating(RatingBucket::EightPlus),
        FilterPredicate::default().with_year("1900"),
    ]
}

// -- applyFilters -------------------------------------------------------------

#[test]
fn filtered_view_is_subsequence_in_collection_order() {
    let collection = sample_movies();
    for predicate in predicates() {
        let positions = apply_filters(&collection, &predicate);
        assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "positions out of order for {predicate:?}: {positions:?}"
        );
        assert!(positions.iter().all(|&p| p < collection.len()));
    }
}

#[test]
fn vacuous_predicate_keeps_everything() {
    let collection = sample_movies();
    let all: Vec<usize> = (0..collection.len()).collect();
    assert_eq!(apply_filters(&collection, &FilterPredicate::default()), all);
}

#[test]
fn all_false_entries_are_vacuous() {
    let collection = sample_movies();
    let mut predicate = FilterPredicate::default().with_year("2010");
    predicate.toggle_year("2010");
    assert_eq!(apply_filters(&collection, &predicate).len(), collection.len());
}

#[test]
fn applying_the_same_predicate_twice_is_idempotent() {
    for predicate in predicates() {
        let once = filtered(view_with(sample_collection(), &[]), predicate.clone());
        let twice = filtered(once.clone(), predicate);
        assert_eq!(once.view, twice.view);
    }
}

#[test]
fn filter_is_recomputed_from_collection_not_previous_view() {
    let narrow = filtered(
        view_with(sample_collection(), &[]),
        FilterPredicate::default().with_year("1999"),
    );
    assert_eq!(narrow.visible_ids(), vec![3]);

    let wider = filtered(narrow, FilterPredicate::default().with_year("2010"));
    assert_eq!(wider.visible_ids(), vec![1, 4]);
}

#[test]
fn concrete_year_and_rating_scenario() {
    let collection = Arc::new(vec![movie(1, 2000, "A", 8.0), movie(2, 2010, "B", 6.0)]);
    let state = view_with(collection, &[]);

    let by_year = filtered(state.clone(), FilterPredicate::default().with_year("2000"));
    assert_eq!(by_year.visible_ids(), vec![1]);

    let by_rating = filtered(
        state,
        FilterPredicate::default().with_rating(RatingBucket::SevenPlus),
    );
    assert_eq!(by_rating.visible_ids(), vec![1]);
}

#[test]
fn categories_intersect_and_values_union() {
    let state = view_with(sample_collection(), &[]);
    let predicate = FilterPredicate::default()
        .with_year("2010")
        .with_year("2014")
        .with_director("Christopher Nolan");
    assert_eq!(filtered(state, predicate).visible_ids(), vec![1, 2]);
}

#[test]
fn rating_buckets_are_ored() {
    let state = view_with(sample_collection(), &[]);
    let predicate = FilterPredicate::default()
        .with_rating(RatingBucket::NinePlus)
        .with_rating(RatingBucket::EightPlus);
    assert_eq!(filtered(state, predicate).visible_ids(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn unmatched_filter_yields_empty_view() {
    let state = filtered(
        view_with(sample_collection(), &[]),
        FilterPredicate::default().with_year("1900"),
    );
    assert!(state.is_empty());
}

// -- toggleFavorite -----------------------------------------------------------

#[test]
fn toggle_favorite_twice_restores_value() {
    let state = view_with(sample_collection(), &[2]);
    for id in [1, 2, 42] {
        let before = state.is_favorite(id);
        let once = reduce(state.clone(), MoviesIntent::ToggleFavorite { id });
        assert_eq!(once.is_favorite(id), !before);
        let twice = reduce(once, MoviesIntent::ToggleFavorite { id });
        assert_eq!(twice.is_favorite(id), before);
    }
}

#[test]
fn toggle_favorite_does_not_touch_view() {
    let state = filtered(
        view_with(sample_collection(), &[]),
        FilterPredicate::default().with_year("2010"),
    );
    let toggled = reduce(state.clone(), MoviesIntent::ToggleFavorite { id: 1 });
    assert_eq!(toggled.view, state.view);
    assert_eq!(toggled.predicate, state.predicate);
}

// -- toggleShowOnlyFavorites --------------------------------------------------

#[test]
fn show_only_favorites_round_trip() {
    let state = view_with(sample_collection(), &[2, 5]);

    let favorites_only = reduce(state, MoviesIntent::ToggleShowOnlyFavorites);
    assert_eq!(favorites_only.visible_ids(), vec![2, 5]);
    assert_eq!(favorites_only.signal, Some(ViewSignal::FavoritesShown));
    assert!(favorites_only.is_showing_only_favorites());

    let restored = reduce(favorites_only, MoviesIntent::ToggleShowOnlyFavorites);
    assert_eq!(restored.visible_ids(), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(restored.signal, Some(ViewSignal::AllShown));
}

#[test]
fn no_favorites_leaves_view_unchanged() {
    let state = filtered(
        view_with(sample_collection(), &[]),
        FilterPredicate::default().with_year("2010"),
    );
    let after = reduce(state.clone(), MoviesIntent::ToggleShowOnlyFavorites);
    assert_eq!(after.view, state.view);
    assert_eq!(after.signal, Some(ViewSignal::NoFavorites));
}

#[test]
fn favorites_outside_collection_do_not_count() {
    let state = view_with(sample_collection(), &[99]);
    let after = reduce(state, MoviesIntent::ToggleShowOnlyFavorites);
    assert_eq!(after.signal, Some(ViewSignal::NoFavorites));
    assert_eq!(after.len(), 6);
}

#[test]
fn favorites_view_ignores_active_predicate() {
    let state = filtered(
        view_with(sample_collection(), &[3, 6]),
        FilterPredicate::default().with_year("2010"),
    );
    let after = reduce(state, MoviesIntent::ToggleShowOnlyFavorites);
    assert_eq!(after.visible_ids(), vec![3, 6]);
    assert!(after.predicate.is_year_selected("2010"));
}

#[test]
fn toggling_off_restores_full_collection_even_when_filtered_before() {
    let state = filtered(
        view_with(sample_collection(), &[3]),
        FilterPredicate::default().with_year("2010"),
    );
    let favorites_only = reduce(state, MoviesIntent::ToggleShowOnlyFavorites);
    let restored = reduce(favorites_only, MoviesIntent::ToggleShowOnlyFavorites);
    assert_eq!(restored.len(), 6);
    assert!(restored.predicate.is_year_selected("2010"));
}

#[test]
fn filter_selecting_only_favorites_reads_as_favorites_view() {
    let state = filtered(
        view_with(sample_collection(), &[1, 4]),
        FilterPredicate::default().with_year("2010"),
    );
    assert!(state.is_showing_only_favorites());

    let after = reduce(state, MoviesIntent::ToggleShowOnlyFavorites);
    assert_eq!(after.len(), 6);
    assert_eq!(after.signal, Some(ViewSignal::AllShown));
}

#[test]
fn empty_filtered_view_toggles_back_to_full_collection() {
    let state = filtered(
        view_with(sample_collection(), &[]),
        FilterPredicate::default().with_year("1900"),
    );
    let after = reduce(state, MoviesIntent::ToggleShowOnlyFavorites);
    assert_eq!(after.len(), 6);
    assert_eq!(after.signal, Some(ViewSignal::AllShown));
}

#[test]
fn unfavoriting_while_showing_favorites_keeps_row_until_next_toggle() {
    let state = reduce(
        view_with(sample_collection(), &[2, 5]),
        MoviesIntent::ToggleShowOnlyFavorites,
    );
    let after = reduce(state, MoviesIntent::ToggleFavorite { id: 2 });
    assert_eq!(after.visible_ids(), vec![2, 5]);
    assert!(!after.is_favorite(2));
}

#[test]
fn dismiss_signal_clears_it() {
    let state = reduce(
        view_with(sample_collection(), &[]),
        MoviesIntent::ToggleShowOnlyFavorites,
    );
    assert!(state.signal.is_some());
    let state = reduce(state, MoviesIntent::DismissSignal);
    assert!(state.signal.is_none());
}

// -- lifecycle ----------------------------------------------------------------

#[test]
fn initialize_keeps_favorites_loaded_earlier() {
    let state = reduce(
        MoviesViewState::default(),
        MoviesIntent::FavoritesLoaded {
            favorites: [4].into_iter().collect(),
        },
    );
    let state = reduce(
        state,
        MoviesIntent::Initialize {
            collection: sample_collection(),
        },
    );
    assert_eq!(state.len(), 6);
    assert!(state.is_favorite(4));
    assert_eq!(state.favorite_count(), 1);
}

#[test]
fn initialize_resets_predicate() {
    let state = filtered(
        view_with(sample_collection(), &[]),
        FilterPredicate::default().with_year("2010"),
    );
    let state = reduce(
        state,
        MoviesIntent::Initialize {
            collection: sample_collection(),
        },
    );
    assert!(state.predicate.is_empty());
    assert_eq!(state.len(), 6);
}

#[test]
fn favorites_loaded_late_do_not_change_view() {
    let state = filtered(
        view_with(sample_collection(), &[]),
        FilterPredicate::default().with_director("Christopher Nolan"),
    );
    let state = reduce(
        state,
        MoviesIntent::FavoritesLoaded {
            favorites: [1, 3].into_iter().collect(),
        },
    );
    assert_eq!(state.visible_ids(), vec![1, 2]);
    assert_eq!(state.favorite_count(), 2);
}

#[test]
fn toggles_before_load_are_replayed_over_loaded_map() {
    let state = reduce(
        MoviesViewState::default(),
        MoviesIntent::Initialize {
            collection: sample_collection(),
        },
    );
    let state = reduce(state, MoviesIntent::ToggleFavorite { id: 5 });
    let state = reduce(state, MoviesIntent::ToggleFavorite { id: 1 });
    let state = reduce(state, MoviesIntent::ToggleFavorite { id: 1 });
    assert!(!state.favorites_loaded);
    assert_eq!(state.pending_edits, vec![(5, true), (1, true), (1, false)]);

    let state = reduce(
        state,
        MoviesIntent::FavoritesLoaded {
            favorites: [1, 3].into_iter().collect(),
        },
    );
    assert!(state.favorites_loaded);
    assert!(state.pending_edits.is_empty());
    assert!(!state.is_favorite(1));
    assert!(state.is_favorite(3));
    assert!(state.is_favorite(5));
}

#[test]
fn toggles_after_load_are_not_queued() {
    let state = view_with(sample_collection(), &[2]);
    let state = reduce(state, MoviesIntent::ToggleFavorite { id: 2 });
    assert!(state.favorites_loaded);
    assert!(state.pending_edits.is_empty());
    assert!(!state.is_favorite(2));
}
