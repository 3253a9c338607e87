use crate::config::Config;
use crate::errors::{ConfigError, FetchError};
use crate::models::{AuthorStat, BooksPage, ClickRatingPoint, RatingBucket, TagCount};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Read-only client for the catalog REST API.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn books(&self, limit: u32, offset: u64) -> Result<BooksPage, FetchError> {
        self.get_json(&format!("/api/books?limit={limit}&offset={offset}"))
            .await
    }

    pub async fn tag_distribution(&self) -> Result<Vec<TagCount>, FetchError> {
        self.get_json("/api/tags/distribution").await
    }

    pub async fn rating_distribution(&self) -> Result<Vec<RatingBucket>, FetchError> {
        self.get_json("/api/ratings/distribution").await
    }

    pub async fn top_authors(&self) -> Result<Vec<AuthorStat>, FetchError> {
        self.get_json("/api/authors/top").await
    }

    pub async fn clicks_rating(&self) -> Result<Vec<ClickRatingPoint>, FetchError> {
        self.get_json("/api/correlation/clicks_rating").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{path}", self.base_url);
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        if !status.is_success() {
            let message = upstream_error_message(&body)
                .unwrap_or_else(|| String::from_utf8_lossy(&body).trim().to_string());
            return Err(FetchError::Status {
                url,
                status,
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { url, source })
    }
}

/// Pulls the message out of an `{"error": "..."}` body.
fn upstream_error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    Some(value.get("error")?.as_str()?.to_owned())
}
