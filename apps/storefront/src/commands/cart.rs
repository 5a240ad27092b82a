//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐                              │
//! │  │  Empty   │───────────────►│ In Cart  │◄──┐ add_to_cart              │
//! │  │  Cart    │                │          │───┘ update_cart_item         │
//! │  └──────────┘◄───────────────└──────────┘                              │
//! │              remove_from_cart                                           │
//! │              (last entry)                                               │
//! │                                                                         │
//! │  Every transition is persisted under @RocketShoes:cart before it       │
//! │  becomes visible.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write as _;

use rocketshoes_catalog::CatalogService;
use rocketshoes_core::{Cart, CartEntry, CartTotals, Locale, ProductId};
use rocketshoes_store::KeyValueStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::notifier::Notifier;
use crate::state::{CartStore, UpdateProductAmount};

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartEntry>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.entries().to_vec(),
            totals: cart.totals(),
        }
    }
}

impl CartResponse {
    /// Renders the cart as a plain-text table.
    ///
    /// ```text
    ///   2 × Tênis de Caminhada Leve Confortável      $359.80
    ///   1 × Tênis VR Caminhada Confortável           $139.90
    /// ──────────────────────────────────────────────────────
    ///   2 products, 3 units                 Total: $499.70
    /// ```
    pub fn render(&self, locale: Locale) -> String {
        if self.items.is_empty() {
            return "Cart is empty\n".to_string();
        }

        let mut out = String::new();
        for item in &self.items {
            let _ = writeln!(
                out,
                "  {:>3} × {:<40} {:>12}   (#{})",
                item.amount,
                item.name,
                locale.format_money(item.line_total()),
                item.id
            );
        }

        let _ = writeln!(out, "{}", "─".repeat(64));
        let _ = writeln!(
            out,
            "  {} products, {} units{:>24}",
            self.totals.item_count,
            self.totals.total_quantity,
            format!("Total: {}", locale.format_money(self.totals.subtotal))
        );
        out
    }
}

/// Gets the current cart contents.
pub fn get_cart<C, S, N>(store: &CartStore<C, S, N>) -> CartResponse
where
    C: CatalogService,
    S: KeyValueStore,
    N: Notifier,
{
    debug!("get_cart command");
    store.with_cart(|cart| CartResponse::from(cart))
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - Product already in cart: amount goes up by one
/// - Product not in cart: fetched from the catalog and appended
/// - Either way the stock is checked first
///
/// ## Returns
/// The cart after the attempt, changed or not
pub async fn add_to_cart<C, S, N>(store: &CartStore<C, S, N>, product_id: ProductId) -> CartResponse
where
    C: CatalogService,
    S: KeyValueStore,
    N: Notifier,
{
    debug!(product_id, "add_to_cart command");
    store.add_product(product_id).await;
    get_cart(store)
}

/// Sets the amount of an item in the cart.
///
/// Amounts below 1 leave the cart alone.
pub async fn update_cart_item<C, S, N>(
    store: &CartStore<C, S, N>,
    product_id: ProductId,
    amount: i64,
) -> CartResponse
where
    C: CatalogService,
    S: KeyValueStore,
    N: Notifier,
{
    debug!(product_id, amount, "update_cart_item command");
    store
        .update_product_amount(UpdateProductAmount { product_id, amount })
        .await;
    get_cart(store)
}

/// Removes an item from the cart.
pub fn remove_from_cart<C, S, N>(store: &CartStore<C, S, N>, product_id: ProductId) -> CartResponse
where
    C: CatalogService,
    S: KeyValueStore,
    N: Notifier,
{
    debug!(product_id, "remove_from_cart command");
    store.remove_product(product_id);
    get_cart(store)
}
