//! Fetch-Through Cache Layer
//!
//! Wraps an async fetch function around the TTL cache primitives, exposing
//! the loading / error / refetch state a UI component binds to. One
//! `CachedFetch` instance corresponds to one mounted consumer.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::TtlCache;

// == Fetch State ==
/// Result slots derived from the latest load or refetch.
#[derive(Debug, Clone)]
pub struct FetchState<T> {
    /// Last successfully adopted payload (cached or freshly fetched)
    pub data: Option<T>,
    /// True while a fetch is in flight
    pub is_loading: bool,
    /// Error message from the last failed fetch, cleared on the next attempt
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
        }
    }
}

// == Cached Fetch ==
/// One consumer's fetch-through binding for a single cache key.
///
/// Multiple instances may share the same cache; they do not coalesce
/// concurrent fetches for the same cold key; each instance runs its own
/// check-then-fetch sequence and handles its own failures.
pub struct CachedFetch<T> {
    /// Shared cache, same eviction algorithm as direct consumers
    cache: Arc<RwLock<TtlCache<T>>>,
    /// Cache key this instance is bound to
    key: String,
    /// Optional per-instance TTL override in seconds
    ttl: Option<u64>,
    /// State slots read by the consumer
    state: RwLock<FetchState<T>>,
}

impl<T: Clone> CachedFetch<T> {
    // == Constructor ==
    /// Binds a new instance to `key` on the shared cache.
    pub fn new(cache: Arc<RwLock<TtlCache<T>>>, key: impl Into<String>, ttl: Option<u64>) -> Self {
        Self {
            cache,
            key: key.into(),
            ttl,
            state: RwLock::new(FetchState::default()),
        }
    }

    // == State ==
    /// Returns a snapshot of the current state slots.
    pub async fn state(&self) -> FetchState<T> {
        self.state.read().await.clone()
    }

    // == Load ==
    /// Adopts the cached value for the key if fresh, otherwise fetches.
    ///
    /// On a cache hit no fetch happens. On a miss the fetcher runs; its
    /// result is stored in the cache on success, or recorded as an error
    /// message on failure (failed fetches are never cached).
    pub async fn load<F, Fut, E>(&self, fetcher: F) -> FetchState<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let cached = self.cache.write().await.get(&self.key);
        if let Some(data) = cached {
            let mut state = self.state.write().await;
            state.data = Some(data);
            state.is_loading = false;
            state.error = None;
            return state.clone();
        }

        self.fetch_and_store(fetcher).await
    }

    // == Refetch ==
    /// Invalidates the cache entry for the key, then fetches unconditionally.
    pub async fn refetch<F, Fut, E>(&self, fetcher: F) -> FetchState<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        self.cache.write().await.delete(&self.key);
        self.fetch_and_store(fetcher).await
    }

    async fn fetch_and_store<F, Fut, E>(&self, fetcher: F) -> FetchState<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        {
            let mut state = self.state.write().await;
            state.is_loading = true;
            state.error = None;
        }

        match fetcher().await {
            Ok(data) => {
                self.cache
                    .write()
                    .await
                    .set(self.key.clone(), data.clone(), self.ttl);

                let mut state = self.state.write().await;
                state.data = Some(data);
                state.is_loading = false;
                state.clone()
            }
            Err(e) => {
                let mut state = self.state.write().await;
                state.error = Some(e.to_string());
                state.is_loading = false;
                state.clone()
            }
        }
    }
}
