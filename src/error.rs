//! Error types for the cart and cache core
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Store Error Enum ==
/// Unified error type for the client core.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Adding the item would mix line items from two different stores.
    ///
    /// Recoverable: the caller clears the cart first, then retries. Never
    /// panics or aborts the mutation pipeline; cart state is untouched.
    #[error("cart holds items from store {existing}, cannot add from store {attempted}")]
    DifferentStoreConflict {
        /// Store id of the items already in the cart
        existing: String,
        /// Store id of the rejected incoming item
        attempted: String,
    },

    /// Durable storage backend inaccessible
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Persisted payload could not be serialized or parsed
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A caller-supplied fetcher rejected (fetch-through cache layer only)
    #[error("fetch failed: {0}")]
    FetchFailed(String),
}

// == Result Type Alias ==
/// Convenience Result type for the client core.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_message_names_both_stores() {
        let err = StoreError::DifferentStoreConflict {
            existing: "store_a".to_string(),
            attempted: "store_b".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("store_a"));
        assert!(msg.contains("store_b"));
    }

    #[test]
    fn test_serialization_error_converts() {
        let parse_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: StoreError = parse_err.into();
        assert!(matches!(err, StoreError::Serialization(_)));
    }
}
