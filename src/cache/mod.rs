//! Cache Module
//!
//! Provides in-memory memoization with TTL expiration: the plain cache used
//! directly by data-loading code paths, and the fetch-through layer that
//! binds an async fetcher to the same primitives.

mod entry;
mod fetch;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use fetch::{CachedFetch, FetchState};
pub use stats::CacheStats;
pub use store::TtlCache;

// == Public Constants ==
/// Default entry TTL in seconds
pub const DEFAULT_TTL_SECS: u64 = 300;

/// Default cleanup sweep interval in seconds
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 300;
