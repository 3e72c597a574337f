//! Response DTOs for the playground API
//!
//! Defines the structure of outgoing JSON response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for POST /run, used for failures too
#[derive(Debug, Clone, Serialize)]
pub struct RunResponse {
    /// Program output or a failure message
    pub output: String,
}

impl RunResponse {
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of fresh cache lookups
    pub hits: u64,
    /// Lookups that found nothing or only a stale entry
    pub misses: u64,
    /// Number of stored paste bodies
    pub stores: u64,
    /// Stale entries removed by the sweeper
    pub purged: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Configured TTL in seconds
    pub ttl_seconds: u64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, ttl_seconds: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            stores: stats.stores,
            purged: stats.purged,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            ttl_seconds,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
