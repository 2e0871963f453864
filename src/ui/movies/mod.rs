//! Filtered movie list with favorites.
//!
//! The displayed list is always recomputed from three inputs: the
//! collection, the active [`FilterPredicate`] and the favorites set.
//!
//! [`FilterPredicate`]: crate::catalog::FilterPredicate

mod intent;
mod reducer;
mod state;

pub use intent::MoviesIntent;
pub use reducer::{apply_filters, MoviesReducer};
pub use state::{MoviesViewState, ViewSignal};
