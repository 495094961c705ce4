//! Cart Line Item Module
//!
//! Defines the line-item model persisted in the cart, and the request shape
//! for adding one.

use chrono::Utc;
use rand::{distr::Alphanumeric, Rng};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// == Cart Item ==
/// One product+quantity entry in the cart, scoped to a single store.
///
/// Display fields (`product_name`, `product_image`, prices, store fields) are
/// snapshots taken at add-time and are never re-fetched; a later catalog
/// change is not reflected until the item is removed and re-added.
///
/// Serialized with camelCase field names to match the persisted storage
/// format under `shella_cart_items`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Opaque unique identifier, stable for the item's lifetime
    pub id: String,
    /// Catalog product identifier
    pub product_id: String,
    /// Product display name
    pub product_name: String,
    /// Localized product display name
    pub product_name_alt: String,
    /// Product image URL, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_image: Option<String>,
    /// Quantity, always >= 1
    pub quantity: u32,
    /// Unit price captured at the moment of adding
    pub price_at_add: Decimal,
    /// Identifier of the single store this item belongs to
    pub store_id: String,
    /// Store display name
    pub store_name: String,
    /// Localized store display name
    pub store_name_alt: String,
    /// Store logo URL, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_logo: Option<String>,
    /// Last known stock ceiling, advisory only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    /// Display hint, advisory only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_special_offer: Option<bool>,
}

// == Add Item Request ==
/// Parameters for adding a product to the cart.
///
/// Carries the product/store display snapshot alongside the identifiers; the
/// cart never fetches catalog data itself.
#[derive(Debug, Clone)]
pub struct AddItemRequest {
    pub product_id: String,
    pub product_name: String,
    pub product_name_alt: String,
    pub product_image: Option<String>,
    pub quantity: u32,
    pub price_at_add: Decimal,
    pub store_id: String,
    pub store_name: String,
    pub store_name_alt: String,
    pub store_logo: Option<String>,
    pub stock: Option<u32>,
    pub has_special_offer: Option<bool>,
}

impl AddItemRequest {
    /// Builds the line item for this request with a freshly generated id.
    ///
    /// Quantity floor of 1: a zero-quantity add produces a single unit rather
    /// than an invalid row.
    pub fn into_item(self) -> CartItem {
        CartItem {
            id: generate_item_id(),
            product_id: self.product_id,
            product_name: self.product_name,
            product_name_alt: self.product_name_alt,
            product_image: self.product_image,
            quantity: self.quantity.max(1),
            price_at_add: self.price_at_add,
            store_id: self.store_id,
            store_name: self.store_name,
            store_name_alt: self.store_name_alt,
            store_logo: self.store_logo,
            stock: self.stock,
            has_special_offer: self.has_special_offer,
        }
    }
}

// == Id Generation ==
/// Generates a line-item id from the millisecond timestamp plus a short
/// random alphanumeric suffix.
///
/// There is no uniqueness check against existing ids; two adds within the
/// same millisecond rely on the suffix alone.
pub fn generate_item_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("{}-{}", Utc::now().timestamp_millis(), suffix)
}
