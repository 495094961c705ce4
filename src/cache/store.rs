//! TTL Cache Store Module
//!
//! In-memory key-value memoization with per-entry TTL, lazy eviction on
//! access, and a cleanup sweep for keys that are written once and never read
//! again.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats};

// == TTL Cache ==
/// Generic TTL cache mapping string keys to payloads of type `T`.
///
/// Entries are logically absent once their age exceeds the TTL; physically
/// they stay in the map until the next access to their key (lazy eviction)
/// or the next [`cleanup_expired`](TtlCache::cleanup_expired) sweep.
#[derive(Debug)]
pub struct TtlCache<T> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// TTL in seconds applied when `set` is called without an explicit TTL
    default_ttl: u64,
    /// Performance statistics
    stats: CacheStats,
}

impl<T> TtlCache<T> {
    // == Constructor ==
    /// Creates a new cache with the given default TTL in seconds.
    pub fn new(default_ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl,
            stats: CacheStats::new(),
        }
    }

    // == Set ==
    /// Stores `data` under `key`, overwriting any existing entry
    /// unconditionally and resetting its capture timestamp.
    pub fn set(&mut self, key: impl Into<String>, data: T, ttl: Option<u64>) {
        let effective_ttl = ttl.unwrap_or(self.default_ttl);
        self.entries
            .insert(key.into(), CacheEntry::new(data, effective_ttl));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a clone of the payload for `key`.
    ///
    /// Returns `None` when the key is absent or its entry has expired; an
    /// expired entry is evicted as a side effect of the read.
    pub fn get(&mut self, key: &str) -> Option<T>
    where
        T: Clone,
    {
        if !self.evict_if_expired(key) {
            self.stats.record_miss();
            return None;
        }

        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.data.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Has ==
    /// Checks whether a fresh entry exists for `key`, with the same lazy
    /// eviction side effect as [`get`](TtlCache::get).
    pub fn has(&mut self, key: &str) -> bool {
        if !self.evict_if_expired(key) {
            self.stats.record_miss();
            return false;
        }

        let present = self.entries.contains_key(key);
        if present {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
        present
    }

    // == Delete ==
    /// Removes an entry unconditionally. Returns whether one was present.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Clear ==
    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Cleanup Expired ==
    /// Removes all currently-expired entries regardless of access.
    ///
    /// Returns the number of entries removed. Bounds growth from keys that
    /// are written once and never read again.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Keys ==
    /// Returns the physically stored keys, including not-yet-evicted stale
    /// ones.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    // == Length ==
    /// Returns the number of physically stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evicts the entry for `key` if it has expired.
    ///
    /// Returns `false` when an expired entry was evicted (the key must then
    /// be treated as absent), `true` otherwise.
    fn evict_if_expired(&mut self, key: &str) -> bool {
        let expired = self
            .entries
            .get(key)
            .map(|entry| entry.is_expired())
            .unwrap_or(false);

        if expired {
            self.entries.remove(key);
            self.stats.record_expiration();
            self.stats.set_total_entries(self.entries.len());
            return false;
        }
        true
    }
}
