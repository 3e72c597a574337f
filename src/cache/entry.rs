//! Cache Entry Module
//!
//! Defines a cached paste body together with its freshness window.

use std::time::Duration;

use tokio::time::Instant;

const SECS_PER_YEAR: u64 = 365 * 24 * 60 * 60;

/// Longest freshness window an entry can have, roughly a century.
pub const MAX_TTL: Duration = Duration::from_secs(100 * SECS_PER_YEAR);

// == Cache Entry ==
/// A fetched paste body and the instants bounding its freshness.
///
/// `expires_at` is fixed at construction and never moves; refreshing a paste
/// means replacing the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Raw paste body as returned by upstream
    pub content: String,
    /// When the entry was stored
    pub cached_at: Instant,
    /// First instant at which the entry is stale
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stored now that stays fresh for `ttl`.
    pub fn new(content: String, ttl: Duration) -> Self {
        Self::stored_at(content, Instant::now(), ttl)
    }

    /// Creates an entry as if it had been stored at `cached_at`.
    ///
    /// TTLs longer than [`MAX_TTL`] are clamped so the expiry instant stays
    /// representable.
    pub fn stored_at(content: String, cached_at: Instant, ttl: Duration) -> Self {
        let expires_at = cached_at
            .checked_add(ttl.min(MAX_TTL))
            .or_else(|| cached_at.checked_add(Duration::from_secs(SECS_PER_YEAR)))
            .unwrap_or(cached_at);

        Self {
            content,
            cached_at,
            expires_at,
        }
    }

    // == Freshness ==
    /// Returns true while `now` is strictly before `expires_at`.
    ///
    /// Boundary condition: an entry whose expiry instant equals `now` is
    /// already stale.
    pub fn is_fresh_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(3600);

    #[tokio::test(start_paused = true)]
    async fn test_entry_creation() {
        let entry = CacheEntry::new("print(1)".to_string(), HOUR);

        assert_eq!(entry.content, "print(1)");
        assert_eq!(entry.expires_at - entry.cached_at, HOUR);
        assert!(entry.is_fresh_at(Instant::now()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expiration() {
        let entry = CacheEntry::new("value".to_string(), Duration::from_secs(1));
        assert!(entry.is_fresh_at(Instant::now()));

        tokio::time::advance(Duration::from_millis(1001)).await;

        assert!(!entry.is_fresh_at(Instant::now()));
    }

    #[test]
    fn test_huge_ttl_is_clamped() {
        let now = Instant::now();
        let entry = CacheEntry::stored_at("test".to_string(), now, Duration::from_secs(u64::MAX));

        assert_eq!(entry.expires_at - now, MAX_TTL);
        assert!(entry.is_fresh_at(now + Duration::from_secs(SECS_PER_YEAR)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let entry = CacheEntry::stored_at("test".to_string(), now, HOUR);

        assert!(entry.is_fresh_at(now));
        assert!(entry.is_fresh_at(now + HOUR - Duration::from_nanos(1)));
        assert!(!entry.is_fresh_at(now + HOUR), "Entry should be stale at boundary");
    }

    #[test]
    fn test_zero_ttl_is_immediately_stale() {
        let now = Instant::now();
        let entry = CacheEntry::stored_at("test".to_string(), now, Duration::ZERO);

        assert!(!entry.is_fresh_at(now));
    }
}
