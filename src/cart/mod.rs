//! Cart Module
//!
//! Durable shopping cart with the single-store policy and observer
//! notifications.

mod item;
mod store;


// Re-export public types
pub use item::{generate_item_id, AddItemRequest, CartItem};
pub use store::{CartStore, Subscription};
