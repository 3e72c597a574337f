//! Stale Entry Sweeper
//!
//! Background task that periodically drops expired pastes from the cache.
//! Lookups already hide stale entries; the sweep only reclaims memory.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::PasteCache;

/// Spawns a background task that periodically purges stale cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. Each sweep holds the cache's write lock only while
/// filtering the map.
///
/// # Arguments
/// * `cache` - Shared paste cache
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(PasteCache::new(Duration::from_secs(3600)));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 600);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: Arc<PasteCache>, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting paste cache sweeper with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired().await;

            if removed > 0 {
                info!("Cache sweep: removed {} stale pastes", removed);
            } else {
                debug!("Cache sweep: no stale pastes found");
            }
        }
    })
}
