use crate::catalog::Movie;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// A (re)load was started. Only leaves `Failed`; a loaded catalog is kept.
    Reload,
    /// Fetch succeeded.
    Loaded { movies: Vec<Movie> },
    /// Fetch failed with a user-facing message.
    Failed { message: String },
}

impl Intent for CatalogIntent {}
