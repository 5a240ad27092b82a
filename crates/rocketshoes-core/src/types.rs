//! # Domain Types
//!
//! Records exchanged with the catalog and kept in the cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Stock       │   │   CartEntry     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  product_id     │   │  id             │       │
//! │  │  name           │   │  amount (max    │   │  name, price    │       │
//! │  │  price          │   │   purchasable)  │   │  image_url      │       │
//! │  │  image_url      │   │                 │   │  amount (>= 1)  │       │
//! │  └────────┬────────┘   └─────────────────┘   └────────▲────────┘       │
//! │           │                                           │                 │
//! │           └──────── CartEntry::from_product ──────────┘                 │
//! │                     (snapshot + amount)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All records serialize in camelCase, which is the shape both the catalog
//! API and the storefront UI use.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Catalog identifier of a product.
pub type ProductId = u64;

// =============================================================================
// Product
// =============================================================================

/// A product as returned by `GET /products/{id}`.
///
/// Fields the cart does not use (descriptions, categories, ...) are ignored
/// when decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    #[ts(type = "number")]
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price.
    #[ts(type = "number")]
    pub price: Money,

    /// Product picture shown in the cart.
    pub image_url: String,
}

// =============================================================================
// Stock
// =============================================================================

/// Maximum purchasable quantity of a product, as returned by
/// `GET /stock/{id}`.
///
/// Never cached: the cart fetches it fresh for every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Stock {
    /// The stock endpoint answers `{ "id": 1, "amount": 3 }`; some
    /// deployments omit the id entirely.
    #[serde(alias = "id", default)]
    #[ts(type = "number")]
    pub product_id: ProductId,

    #[ts(type = "number")]
    pub amount: i64,
}

impl Stock {
    pub fn new(product_id: ProductId, amount: i64) -> Self {
        Stock { product_id, amount }
    }

    /// Checks whether `requested` units fit in the available stock.
    #[inline]
    pub fn allows(&self, requested: i64) -> bool {
        requested <= self.amount
    }
}

// =============================================================================
// Cart Entry
// =============================================================================

/// One product line in the cart.
///
/// ## Invariants
/// - `amount >= 1` while the entry is in a cart (zero means removed)
/// - `id` is unique within a cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartEntry {
    #[ts(type = "number")]
    pub id: ProductId,
    pub name: String,
    #[ts(type = "number")]
    pub price: Money,
    pub image_url: String,

    /// Units in the cart.
    #[ts(type = "number")]
    pub amount: i64,
}

impl CartEntry {
    /// Creates a cart entry from a catalog product.
    ///
    /// Name, price and picture are frozen at this moment; later catalog
    /// changes do not alter an entry already in the cart.
    pub fn from_product(product: &Product, amount: i64) -> Self {
        CartEntry {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            amount,
        }
    }

    /// Unit price × amount.
    pub fn line_total(&self) -> Money {
        self.price.multiply_amount(self.amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
