//! Remote movie source.
//!
//! The core only depends on [`MovieSource`]; [`HttpMovieClient`] is the
//! reqwest-backed implementation used by the binary.

mod client;
mod error;

use async_trait::async_trait;

use crate::catalog::{Movie, MovieId};

pub use client::HttpMovieClient;
pub use error::ApiError;

/// Fetch collaborator for the catalog.
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Fetch the full collection in server order.
    async fn fetch_all(&self) -> Result<Vec<Movie>, ApiError>;

    /// Fetch a single movie by id.
    async fn fetch_by_id(&self, id: MovieId) -> Result<Movie, ApiError>;
}
