//! Shella client core - cart store and short-lived data cache
//!
//! Provides the durable shopping-cart store (single-store policy, observer
//! notifications) and the in-memory TTL cache used to de-duplicate reference
//! data fetches within a session.

pub mod cache;
pub mod cart;
pub mod config;
pub mod error;
pub mod search_history;
pub mod storage;
pub mod tasks;

pub use cache::{CacheStats, CachedFetch, FetchState, TtlCache};
pub use cart::{AddItemRequest, CartItem, CartStore, Subscription};
pub use config::Config;
pub use error::{Result, StoreError};
pub use search_history::SearchHistory;
pub use storage::{FileBackend, MemoryBackend, StorageBackend};
pub use tasks::spawn_cleanup_task;
