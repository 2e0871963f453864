use thiserror::Error;

/// Errors returned by the movies API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Configured base URL is not an absolute http(s) URL
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// reqwest client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure (connect, timeout, body read)
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Request to '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    /// Body was not the expected JSON shape
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}
