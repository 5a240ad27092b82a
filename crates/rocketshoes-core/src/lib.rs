//! # rocketshoes-core: Pure Cart Logic for the RocketShoes Storefront
//!
//! This crate holds the cart rules as pure functions with zero I/O.
//! The catalog lookups and the storage writes live in sibling crates;
//! everything here can be tested without a runtime or a network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     RocketShoes Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront UI                                │   │
//! │  │    Product list ──► Cart page ──► Header (cart size)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    CartStore (apps/storefront)                  │   │
//! │  │    add_product, remove_product, update_product_amount           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ rocketshoes-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  notice   │  │   │
//! │  │   │ CartEntry │  │   Money   │  │   Cart    │  │NoticeKind │  │   │
//! │  │   │  Product  │  │           │  │CartTotals │  │  Locale   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog and cart records (Product, Stock, CartEntry)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - The ordered cart collection and its stock rules
//! - [`notice`] - User-facing message kinds and their localized text
//! - [`error`] - Domain error types
//! - [`validation`] - Invariant checks for entries loaded from storage
//!
//! ## Example Usage
//!
//! ```rust
//! use rocketshoes_core::{Cart, Money, Product, Stock};
//!
//! let product = Product {
//!     id: 1,
//!     name: "Tênis de Caminhada Leve Confortável".to_string(),
//!     price: Money::from_cents(17990),
//!     image_url: "https://example.com/tenis1.jpg".to_string(),
//! };
//!
//! let mut cart = Cart::new();
//! let stock = Stock::new(1, 5);
//! let amount = cart.increment(1, &stock, Some(&product)).unwrap();
//!
//! assert_eq!(amount, 1);
//! assert_eq!(cart.totals().subtotal.cents(), 17990);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod notice;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use notice::{Locale, Notice, NoticeKind, Severity};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key under which the serialized cart is persisted.
///
/// Shared with the storefront UI, so it must never change without a
/// migration of already-stored carts.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";
