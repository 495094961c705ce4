//! Search History Module
//!
//! Small utility over the same storage namespace as the cart: remembers the
//! most recent search terms under the `searchHistory` key.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::storage::{StorageBackend, SEARCH_HISTORY_KEY};

// == Search Entry ==
/// One remembered search term with its capture timestamp (Unix milliseconds).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    pub term: String,
    pub timestamp: i64,
}

// == Search History ==
/// Recent-search list persisted through the storage backend, newest first.
pub struct SearchHistory {
    backend: Arc<dyn StorageBackend>,
    limit: usize,
}

impl SearchHistory {
    /// Creates a history over the given backend, retaining at most `limit`
    /// terms.
    pub fn new(backend: Arc<dyn StorageBackend>, limit: usize) -> Self {
        Self { backend, limit }
    }

    // == Record ==
    /// Records a search term at the head of the history.
    ///
    /// Blank terms are ignored. A term already in the history (compared
    /// case-insensitively) moves to the head with a fresh timestamp rather
    /// than duplicating. The list is truncated to the configured limit.
    pub fn record(&self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            return;
        }

        let mut entries = self.recent();
        entries.retain(|e| !e.term.eq_ignore_ascii_case(term));
        entries.insert(
            0,
            SearchEntry {
                term: term.to_string(),
                timestamp: Utc::now().timestamp_millis(),
            },
        );
        entries.truncate(self.limit);

        self.persist(&entries);
    }

    // == Recent ==
    /// Returns the remembered terms, newest first.
    ///
    /// Fail-soft: an unavailable backend or corrupt payload reads as empty.
    pub fn recent(&self) -> Vec<SearchEntry> {
        let raw = match self.backend.read(SEARCH_HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(backend = self.backend.name(), error = %e, "search history read failed");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "search history unparseable, treating as empty");
                Vec::new()
            }
        }
    }

    // == Clear ==
    /// Forgets all remembered terms.
    pub fn clear(&self) {
        if let Err(e) = self.backend.remove(SEARCH_HISTORY_KEY) {
            warn!(backend = self.backend.name(), error = %e, "search history clear failed");
        }
    }

    fn persist(&self, entries: &[SearchEntry]) {
        if let Err(e) = self.try_persist(entries) {
            warn!(backend = self.backend.name(), error = %e, "search history persist failed");
        }
    }

    fn try_persist(&self, entries: &[SearchEntry]) -> Result<()> {
        let payload = serde_json::to_string(entries)?;
        self.backend.write(SEARCH_HISTORY_KEY, &payload)
    }
}
