//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single memoized payload with its capture timestamp and TTL.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored payload
    pub data: T,
    /// Capture timestamp (Unix milliseconds)
    pub stored_at: u64,
    /// Lifetime in milliseconds
    pub ttl_ms: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new cache entry captured now.
    pub fn new(data: T, ttl_seconds: u64) -> Self {
        Self {
            data,
            stored_at: current_timestamp_ms(),
            ttl_ms: ttl_seconds * 1000,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once its age strictly exceeds
    /// the TTL (`now - stored_at > ttl`). At exactly the TTL it is still
    /// considered fresh.
    pub fn is_expired(&self) -> bool {
        self.age_ms() > self.ttl_ms
    }

    // == Age ==
    /// Returns the entry's age in milliseconds.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.stored_at)
    }

    // == Time To Live ==
    /// Returns remaining lifetime in milliseconds, zero once expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        self.ttl_ms.saturating_sub(self.age_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
