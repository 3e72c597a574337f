//! HTTP client for the paste scraping API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, warn};

use super::{PasteSource, PasteSummary};
use crate::error::{AppError, Result};

const USER_AGENT_VALUE: &str = concat!("paste-playground/", env!("CARGO_PKG_VERSION"));

/// Scraping API client.
#[derive(Debug, Clone)]
pub struct ScrapeClient {
    client: reqwest::Client,
    base_url: String,
    list_limit: u32,
}

impl ScrapeClient {
    pub fn new(base_url: &str, timeout: Duration, list_limit: u32) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| AppError::Internal(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            list_limit,
        })
    }

    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        Self::new(
            &config.upstream_url,
            config.upstream_timeout(),
            config.list_limit,
        )
    }

    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .query(query)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| {
                warn!(url = %url, error = %e, "upstream request failed");
                AppError::Upstream(e.to_string())
            })
    }
}

#[async_trait]
impl PasteSource for ScrapeClient {
    async fn list_pastes(&self, language: Option<&str>) -> Result<Vec<PasteSummary>> {
        let url = format!("{}/api_scraping.php", self.base_url);
        let mut query = vec![("limit", self.list_limit.to_string())];
        if let Some(language) = language {
            query.push(("lang", language.to_string()));
        }
        debug!(url = %url, language = ?language, "listing pastes");

        let body = self
            .get(&url, &query)
            .await?
            .bytes()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "upstream listing is not valid JSON");
            AppError::Decode(e.to_string())
        })
    }

    async fn fetch_paste(&self, key: &str) -> Result<String> {
        let url = format!("{}/api_scrape_item.php", self.base_url);
        debug!(key, "fetching paste content");

        self.get(&url, &[("i", key.to_string())])
            .await?
            .text()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))
    }
}
