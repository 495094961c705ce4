//! Cart Store Module
//!
//! The authoritative, durably-persisted cart for one client device. Enforces
//! the single-store policy, persists every mutation through the storage
//! backend, and broadcasts change notifications to subscribed observers.

use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use tracing::warn;

use crate::cart::{AddItemRequest, CartItem};
use crate::error::{Result, StoreError};
use crate::storage::{StorageBackend, CART_ITEMS_KEY};

type Callback = Arc<dyn Fn() + Send + Sync>;

// == Subscription Handle ==
/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

#[derive(Default)]
struct ObserverList {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

// == Cart Store ==
/// Durable cart store with observer notifications.
///
/// The backend is the source of truth: every read parses the persisted list,
/// every mutation reads, modifies, and rewrites it whole. Persistence is
/// best-effort; write failures are logged and swallowed, and the next read
/// reflects the last successfully committed state.
pub struct CartStore {
    /// Durable key-value storage
    backend: Box<dyn StorageBackend>,
    /// Change observers, notified after every successful mutation
    observers: Mutex<ObserverList>,
}

impl CartStore {
    // == Constructor ==
    /// Creates a cart store over the given storage backend.
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            backend,
            observers: Mutex::new(ObserverList::default()),
        }
    }

    // == Read All Items ==
    /// Returns the current line items in insertion order.
    ///
    /// Fail-soft: an unavailable backend or an unparseable payload reads as
    /// an empty cart, logged at warn.
    pub fn items(&self) -> Vec<CartItem> {
        let raw = match self.backend.read(CART_ITEMS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(backend = self.backend.name(), error = %e, "cart read failed, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "cart payload unparseable, treating as empty");
                Vec::new()
            }
        }
    }

    // == Add Item ==
    /// Adds a product to the cart.
    ///
    /// Rejects with [`StoreError::DifferentStoreConflict`] when the cart is
    /// non-empty and holds items from another store; state is unchanged and
    /// the caller must clear the cart before retrying. An existing line with
    /// the same `(product_id, store_id)` has its quantity incremented instead
    /// of a duplicate row being created.
    ///
    /// Returns the resulting line item (merged or newly appended).
    pub fn add_item(&self, request: AddItemRequest) -> Result<CartItem> {
        let mut items = self.items();

        if let Some(first) = items.first() {
            if first.store_id != request.store_id {
                return Err(StoreError::DifferentStoreConflict {
                    existing: first.store_id.clone(),
                    attempted: request.store_id,
                });
            }
        }

        let added = match items
            .iter_mut()
            .find(|i| i.product_id == request.product_id && i.store_id == request.store_id)
        {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(request.quantity.max(1));
                existing.clone()
            }
            None => {
                let item = request.into_item();
                items.push(item.clone());
                item
            }
        };

        self.persist(&items);
        self.notify();
        Ok(added)
    }

    // == Update Quantity ==
    /// Sets an item's quantity to an absolute value.
    ///
    /// A value of zero or below removes the row entirely. Returns `false`
    /// with no persistence or broadcast when the id is unknown.
    pub fn update_quantity(&self, item_id: &str, new_quantity: i64) -> bool {
        let mut items = self.items();

        let Some(pos) = items.iter().position(|i| i.id == item_id) else {
            return false;
        };

        if new_quantity <= 0 {
            items.remove(pos);
        } else {
            items[pos].quantity = new_quantity.min(i64::from(u32::MAX)) as u32;
        }

        self.persist(&items);
        self.notify();
        true
    }

    // == Remove Item ==
    /// Removes the matching line item.
    ///
    /// Idempotent: removing an unknown id is a silent no-op. Returns whether
    /// an item was actually removed; the broadcast only fires in that case.
    pub fn remove_item(&self, item_id: &str) -> bool {
        let mut items = self.items();
        let before = items.len();
        items.retain(|i| i.id != item_id);

        if items.len() == before {
            return false;
        }

        self.persist(&items);
        self.notify();
        true
    }

    // == Clear Cart ==
    /// Empties the entire cart. Idempotent on an already-empty cart.
    pub fn clear(&self) {
        self.persist(&[]);
        self.notify();
    }

    // == Count Items ==
    /// Returns the sum of all quantities (not the row count), for badges.
    pub fn item_count(&self) -> u64 {
        self.items().iter().map(|i| u64::from(i.quantity)).sum()
    }

    // == Cart Total ==
    /// Returns the cart total from the captured add-time prices.
    pub fn total(&self) -> Decimal {
        self.items()
            .iter()
            .map(|i| i.price_at_add * Decimal::from(i.quantity))
            .sum()
    }

    // == Subscribe ==
    /// Registers a change observer, called after every successful mutation.
    ///
    /// Callbacks run after the list lock is released, so a callback may
    /// itself mutate the cart or manage subscriptions. A mutation from
    /// inside a callback triggers another broadcast; callbacks that mutate
    /// unconditionally will recurse.
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> Subscription {
        let mut observers = self.observers.lock().unwrap_or_else(|e| e.into_inner());
        let id = observers.next_id;
        observers.next_id += 1;
        observers.entries.push((id, Arc::new(callback)));
        Subscription(id)
    }

    // == Unsubscribe ==
    /// Removes a previously registered observer.
    pub fn unsubscribe(&self, subscription: Subscription) {
        let mut observers = self.observers.lock().unwrap_or_else(|e| e.into_inner());
        observers.entries.retain(|(id, _)| *id != subscription.0);
    }

    /// Best-effort persistence: failures are logged, never surfaced.
    fn persist(&self, items: &[CartItem]) {
        if let Err(e) = self.try_persist(items) {
            warn!(backend = self.backend.name(), error = %e, "cart persist failed");
        }
    }

    fn try_persist(&self, items: &[CartItem]) -> Result<()> {
        let payload = serde_json::to_string(items)?;
        self.backend.write(CART_ITEMS_KEY, &payload)
    }

    fn notify(&self) {
        // Snapshot the callbacks so none run while the list is locked;
        // observers may re-enter the store.
        let callbacks: Vec<Callback> = {
            let observers = self.observers.lock().unwrap_or_else(|e| e.into_inner());
            observers
                .entries
                .iter()
                .map(|(_, callback)| Arc::clone(callback))
                .collect()
        };

        for callback in callbacks {
            callback();
        }
    }
}
