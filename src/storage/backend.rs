//! Storage Backend Trait
//!
//! Defines the key-value capability the cart store and search history are
//! built on, plus the in-memory implementation.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::Result;

// == Storage Backend ==
/// A synchronous, string-valued key-value store.
///
/// Values are opaque strings; serialization happens in the consumers. A
/// missing key reads as `None`, never as an error.
pub trait StorageBackend: Send + Sync {
    /// A name for log lines.
    ///
    /// # Example
    /// - "memory"
    /// - "file"
    fn name(&self) -> &'static str;

    /// Returns the stored value for `key`, or `None` if absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, overwriting any existing value.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

// == Memory Backend ==
/// In-memory storage backend.
///
/// The fallback for host environments without durable storage, and the
/// default backend in tests. Contents are lost when the backend is dropped.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    /// Key-value contents
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Creates a new empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}
