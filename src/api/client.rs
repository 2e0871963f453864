use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::api::{ApiError, MovieSource};
use crate::catalog::{Movie, MovieId};
use crate::config::ApiConfig;

/// Movies API client over HTTP.
///
/// `GET {base_url}` returns the collection, `GET {base_url}/{id}` a single
/// movie. Both are JSON.
pub struct HttpMovieClient {
    client: Client,
    base_url: String,
}

impl HttpMovieClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(&config.base_url)?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .user_agent(concat!("cinelist/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client, base_url })
    }

    fn movie_url(&self, id: MovieId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| ApiError::Request {
            url: url.clone(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { url, source })
    }
}

#[async_trait]
impl MovieSource for HttpMovieClient {
    async fn fetch_all(&self) -> Result<Vec<Movie>, ApiError> {
        self.get_json(self.base_url.clone()).await
    }

    async fn fetch_by_id(&self, id: MovieId) -> Result<Movie, ApiError> {
        self.get_json(self.movie_url(id)).await
    }
}

/// Validate the base URL and strip any trailing slash.
fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let url = Url::parse(raw.trim()).map_err(|e| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
