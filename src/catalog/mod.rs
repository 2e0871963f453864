//! Movie catalog: the fetched collection and the filter values derived from it.
//!
//! The collection is loaded once per session through a [`MovieSource`] and is
//! read-only afterwards. Everything the filter dialog offers (years,
//! directors) is projected from it by [`AvailableFilters::from_movies`].
//!
//! [`MovieSource`]: crate::api::MovieSource

mod predicate;
mod store;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub use predicate::{FilterPredicate, RatingBucket};
pub use store::{load_catalog, CatalogStore, FETCH_FAILED_MESSAGE};

/// Stable identifier of a movie within a session.
pub type MovieId = u64;

/// A single catalog entry as served by the movies API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub director: String,
    /// Poster image URI.
    #[serde(default)]
    pub poster: String,
    pub year: i32,
    pub rating: f64,
}

/// Distinct filter values present in the collection, sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AvailableFilters {
    pub years: Vec<String>,
    pub directors: Vec<String>,
}

impl AvailableFilters {
    /// Project years (as strings) and directors out of `movies`, dedupe and sort.
    pub fn from_movies(movies: &[Movie]) -> Self {
        let years: BTreeSet<String> = movies.iter().map(|m| m.year.to_string()).collect();
        let directors: BTreeSet<&str> = movies.iter().map(|m| m.director.as_str()).collect();

        Self {
            years: years.into_iter().collect(),
            directors: directors.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty() && self.directors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId, year: i32, director: &str) -> Movie {
        Movie {
            id,
            title: format!("Movie {id}"),
            director: director.to_string(),
            poster: String::new(),
            year,
            rating: 7.0,
        }
    }

    #[test]
    fn available_filters_are_deduplicated_and_sorted() {
        let movies = vec![
            movie(1, 2010, "Nolan"),
            movie(2, 1999, "Wachowski"),
            movie(3, 2010, "Fincher"),
            movie(4, 1999, "Nolan"),
        ];

        let filters = AvailableFilters::from_movies(&movies);

        assert_eq!(filters.years, vec!["1999", "2010"]);
        assert_eq!(filters.directors, vec!["Fincher", "Nolan", "Wachowski"]);
    }

    #[test]
    fn available_filters_of_empty_collection_are_empty() {
        let filters = AvailableFilters::from_movies(&[]);
        assert!(filters.is_empty());
    }

    #[test]
    fn movie_deserializes_without_poster() {
        let json = r#"{"id":7,"title":"Heat","director":"Mann","year":1995,"rating":8.3}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 7);
        assert!(movie.poster.is_empty());
    }
}
