//! Cache Module
//!
//! In-memory paste cache with a fixed TTL and lazy expiry.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{CacheEntry, MAX_TTL};
pub use stats::{CacheCounters, CacheStats};
pub use store::PasteCache;

// == Public Constants ==
/// Default freshness window for cached pastes, in seconds
pub const DEFAULT_TTL_SECS: u64 = 60 * 60;
