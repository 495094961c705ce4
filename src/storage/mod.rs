//! Storage Module
//!
//! Durable, string-valued key-value storage behind a capability trait. The
//! host environment picks the implementation at construction time: a real
//! file-backed store, or the in-memory fallback for environments without
//! durable storage (and for tests).

mod backend;
mod file;

// Re-export public types
pub use backend::{MemoryBackend, StorageBackend};
pub use file::FileBackend;

// == Storage Namespace ==
/// Key under which the serialized cart line items live
pub const CART_ITEMS_KEY: &str = "shella_cart_items";

/// Key under which the search-history entries live
pub const SEARCH_HISTORY_KEY: &str = "searchHistory";
