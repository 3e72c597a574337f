//! Paste Service
//!
//! Fetch-on-miss coordination between the paste cache and the upstream source.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::PasteCache;
use crate::error::Result;
use crate::upstream::{PasteSource, PasteSummary};

/// Serves paste listings and bodies, caching bodies for the cache's TTL.
#[derive(Clone)]
pub struct PasteService {
    cache: Arc<PasteCache>,
    source: Arc<dyn PasteSource>,
}

impl PasteService {
    pub fn new(cache: Arc<PasteCache>, source: Arc<dyn PasteSource>) -> Self {
        Self { cache, source }
    }

    pub fn cache(&self) -> &Arc<PasteCache> {
        &self.cache
    }

    // == Content ==
    /// Returns the body of `key`, fetching it from upstream on a miss.
    ///
    /// The upstream call happens with no cache lock held. Concurrent misses
    /// for the same key may each fetch and store. Failed fetches are never
    /// stored.
    pub async fn content(&self, key: &str) -> Result<String> {
        if let Some(content) = self.cache.get(key).await {
            debug!(key, "paste cache hit");
            return Ok(content);
        }

        debug!(key, "paste cache miss, fetching upstream");
        let content = self.source.fetch_paste(key).await.inspect_err(|e| {
            warn!(key, error = %e, "paste fetch failed");
        })?;

        self.cache.put(key, content.clone()).await;
        Ok(content)
    }

    // == List ==
    /// Lists recent pastes; `None`, `""` and `"all"` disable the filter.
    pub async fn list(&self, language: Option<&str>) -> Result<Vec<PasteSummary>> {
        let filter = language.filter(|l| !l.is_empty() && *l != "all");
        self.source.list_pastes(filter).await
    }
}
