//! Upstream Module
//!
//! Access to the external paste scraping API.

mod scrape;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::Result;

pub use scrape::ScrapeClient;

// == Paste Summary ==
/// One row of the upstream paste listing.
///
/// Upstream sends every field as a string; absent fields default to empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PasteSummary {
    pub key: String,
    pub title: String,
    /// Creation time as unix seconds
    pub date: String,
    /// Body size in bytes
    pub size: String,
    pub syntax: String,
    pub scrape_url: String,
    pub user: String,
}

// == Paste Source ==
/// Where paste listings and bodies come from.
#[async_trait]
pub trait PasteSource: Send + Sync {
    /// Lists recent pastes, optionally filtered by upstream syntax name.
    async fn list_pastes(&self, language: Option<&str>) -> Result<Vec<PasteSummary>>;

    /// Fetches the raw body of one paste.
    async fn fetch_paste(&self, key: &str) -> Result<String>;
}
