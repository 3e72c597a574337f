//! Paste Cache Module
//!
//! Process-wide paste cache: a HashMap behind a reader/writer lock with
//! lazy TTL expiry.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::trace;

use crate::cache::{CacheCounters, CacheEntry, CacheStats};

// == Paste Cache ==
/// Time-expiring map from paste key to paste body.
///
/// Lookups share the read lock, stores take the write lock. Stale entries are
/// hidden from [`get`](Self::get) but stay in memory until
/// [`purge_expired`](Self::purge_expired) runs.
#[derive(Debug)]
pub struct PasteCache {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Activity counters
    counters: CacheCounters,
    /// Freshness window applied to every stored entry
    ttl: Duration,
}

impl PasteCache {
    // == Constructor ==
    /// Creates an empty cache whose entries stay fresh for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            counters: CacheCounters::new(),
            ttl,
        }
    }

    // == Get ==
    /// Returns the cached body for `key` if it is still fresh.
    ///
    /// Missing, swept and stale entries all yield `None`.
    pub async fn get(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        let content = {
            let entries = self.entries.read().await;
            entries
                .get(key)
                .filter(|entry| entry.is_fresh_at(now))
                .map(|entry| entry.content.clone())
        };

        match content {
            Some(_) => self.counters.record_hit(),
            None => self.counters.record_miss(),
        }
        trace!(key, hit = content.is_some(), "paste cache lookup");

        content
    }

    // == Put ==
    /// Stores `content` under `key`, replacing any previous entry and
    /// restarting its TTL.
    pub async fn put(&self, key: impl Into<String>, content: impl Into<String>) {
        let entry = CacheEntry::new(content.into(), self.ttl);
        let key = key.into();
        trace!(key = %key, "paste cache store");

        self.entries.write().await.insert(key, entry);
        self.counters.record_store();
    }

    // == Purge Expired ==
    /// Removes all stale entries and returns how many were dropped.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let removed = {
            let mut entries = self.entries.write().await;
            let before = entries.len();
            entries.retain(|_, entry| entry.is_fresh_at(now));
            before - entries.len()
        };

        self.counters.record_purged(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let total_entries = self.len().await;
        self.counters.snapshot(total_entries)
    }

    /// Freshness window of this cache.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of held entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
