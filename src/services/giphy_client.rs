//! Giphy item source.
//!
//! Thin async client for the search and trending endpoints. The API key comes
//! from settings (or `GIFFIRE_GIPHY_API_KEY`); it is never compiled in.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;

use crate::types::errors::GiphyError;
use crate::types::gif::Gif;
use crate::types::settings::GiphySettings;

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "GIFFIRE_GIPHY_API_KEY";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Trait for anything that can look up GIFs.
#[async_trait]
pub trait GifSource: Send + Sync {
    /// GIFs matching `query`. An empty query yields no results.
    async fn search(&self, query: &str) -> Result<Vec<Gif>, GiphyError>;
    /// Currently trending GIFs.
    async fn trending(&self) -> Result<Vec<Gif>, GiphyError>;
}

#[derive(Deserialize)]
struct GiphyResponse {
    #[serde(default)]
    data: Vec<Gif>,
}

#[derive(Deserialize)]
struct GiphyErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    meta: Option<GiphyMeta>,
}

#[derive(Deserialize)]
struct GiphyMeta {
    #[serde(default)]
    msg: String,
}

/// Giphy REST client.
pub struct GiphyClient {
    http: reqwest::Client,
    settings: GiphySettings,
}

impl GiphyClient {
    pub fn new(mut settings: GiphySettings) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                settings.api_key = key.trim().to_string();
            }
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });

        Self { http, settings }
    }

    pub fn page_size(&self) -> u32 {
        self.settings.page_size
    }

    async fn fetch(&self, endpoint: &str, extra: &[(&str, &str)]) -> Result<Vec<Gif>, GiphyError> {
        if self.settings.api_key.is_empty() {
            return Err(GiphyError::MissingApiKey);
        }

        let url = format!("{}/{}", self.settings.base_url.trim_end_matches('/'), endpoint);
        let limit = self.settings.page_size.to_string();
        let mut query: Vec<(&str, &str)> = vec![
            ("api_key", self.settings.api_key.as_str()),
            ("limit", limit.as_str()),
            ("rating", self.settings.rating.as_str()),
        ];
        query.extend_from_slice(extra);

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| GiphyError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| GiphyError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            let msg = serde_json::from_slice::<GiphyErrorBody>(&body)
                .ok()
                .and_then(|b| b.message.or(b.meta.map(|m| m.msg)))
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
            return Err(GiphyError::ApiError(status.as_u16(), msg));
        }

        let parsed: GiphyResponse =
            serde_json::from_slice(&body).map_err(|e| GiphyError::ParseError(e.to_string()))?;
        debug!("Giphy {} returned {} GIFs", endpoint, parsed.data.len());
        Ok(parsed.data)
    }
}

#[async_trait]
impl GifSource for GiphyClient {
    async fn search(&self, query: &str) -> Result<Vec<Gif>, GiphyError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch("search", &[("q", query)]).await
    }

    async fn trending(&self) -> Result<Vec<Gif>, GiphyError> {
        self.fetch("trending", &[]).await
    }
}
