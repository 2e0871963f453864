use std::sync::Arc;

use crate::catalog::AvailableFilters;
use crate::ui::catalog::intent::CatalogIntent;
use crate::ui::catalog::state::CatalogState;
use crate::ui::mvi::Reducer;

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            // The collection is read-only for the rest of the session once loaded.
            (loaded @ CatalogState::Loaded { .. }, _) => loaded,
            (_, CatalogIntent::Reload) => CatalogState::Loading,
            (_, CatalogIntent::Loaded { movies }) => {
                let filters = AvailableFilters::from_movies(&movies);
                CatalogState::Loaded {
                    movies: Arc::new(movies),
                    filters,
                }
            }
            (_, CatalogIntent::Failed { message }) => CatalogState::Failed { message },
        }
    }
}
