//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired cache entries, bounding
//! growth from keys that are written once and never read again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::TtlCache;

/// Spawns a background task that periodically evicts expired cache entries.
///
/// The task loops forever, sleeping for the configured interval between
/// sweeps and taking the write lock only for the sweep itself. The reference
/// deployment runs one sweep every 5 minutes.
///
/// # Arguments
/// * `cache` - Shared cache to sweep
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during shutdown.
pub fn spawn_cleanup_task<T>(
    cache: Arc<RwLock<TtlCache<T>>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()>
where
    T: Send + Sync + 'static,
{
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = Arc::new(RwLock::new(TtlCache::new(300)));

        // Add an entry with very short TTL
        {
            let mut cache_guard = cache.write().await;
            cache_guard.set("expire_soon", "value".to_string(), Some(1));
        }

        // Spawn cleanup task with 1 second interval
        let handle = spawn_cleanup_task(Arc::clone(&cache), 1);

        // Wait for the entry to expire and a sweep to run
        tokio::time::sleep(Duration::from_millis(2500)).await;

        // The stale entry is gone without ever being read
        {
            let cache_guard = cache.read().await;
            assert_eq!(cache_guard.len(), 0, "expired entry should have been swept");
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_preserves_valid_entries() {
        let cache = Arc::new(RwLock::new(TtlCache::new(300)));

        {
            let mut cache_guard = cache.write().await;
            cache_guard.set("long_lived", "value".to_string(), Some(3600));
        }

        let handle = spawn_cleanup_task(Arc::clone(&cache), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let mut cache_guard = cache.write().await;
            assert_eq!(cache_guard.get("long_lived"), Some("value".to_string()));
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let cache: Arc<RwLock<TtlCache<String>>> = Arc::new(RwLock::new(TtlCache::new(300)));

        let handle = spawn_cleanup_task(cache, 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "task should be finished after abort");
    }
}
