//! # Cart
//!
//! The ordered collection of cart entries and the stock rules that guard
//! every change to it.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Operations                                 │
//! │                                                                         │
//! │  increment(id, stock, product)                                          │
//! │     amount(id) + 1 > stock? ──► OutOfStock                              │
//! │     entry exists?           ──► entry.amount += 1   (in place)          │
//! │     else                    ──► entries.push(product, amount 1)         │
//! │                                                                         │
//! │  set_amount(id, amount, stock)                                          │
//! │     amount <= 0?            ──► Validation                              │
//! │     amount > stock?         ──► OutOfStock                              │
//! │     entry exists?           ──► entry.amount = amount                   │
//! │     else                    ──► EntryNotFound                           │
//! │                                                                         │
//! │  remove(id)                                                             │
//! │     entry exists?           ──► entries.remove(index)                   │
//! │     else                    ──► EntryNotFound                           │
//! │                                                                         │
//! │  A failed operation leaves the cart exactly as it was.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartEntry, Product, ProductId, Stock};
use crate::validation::{validate_amount, validate_entries};

/// The shopping cart.
///
/// ## Invariants
/// - Entries are unique by `id` (adding the same product bumps its amount)
/// - Every amount is >= 1 (an entry is removed, never zeroed)
/// - Insertion order is preserved; existing entries are updated in place
///
/// Serializes as a bare JSON array of entries, which is the persisted
/// format. Decoding goes through [`Cart::from_json`] so the invariants are
/// checked.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            entries: Vec::new(),
        }
    }

    /// Builds a cart from entries, checking the invariants.
    pub fn from_entries(entries: Vec<CartEntry>) -> CoreResult<Self> {
        validate_entries(&entries)?;
        Ok(Cart { entries })
    }

    /// Decodes a persisted cart blob.
    ///
    /// ## Example
    /// ```rust
    /// use rocketshoes_core::Cart;
    ///
    /// let json = r#"[{"id":1,"name":"Tênis","price":179.9,"imageUrl":"a.jpg","amount":2}]"#;
    /// let cart = Cart::from_json(json).unwrap();
    /// assert_eq!(cart.amount_of(1), 2);
    ///
    /// assert!(Cart::from_json("{ not json").is_err());
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let entries: Vec<CartEntry> = serde_json::from_str(json)?;
        Cart::from_entries(entries)
    }

    /// Encodes the cart into its persisted form.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    // -------------------------------------------------------------------------
    // Lookups
    // -------------------------------------------------------------------------

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<CartEntry> {
        self.entries
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Current amount of a product, 0 when it is not in the cart.
    pub fn amount_of(&self, product_id: ProductId) -> i64 {
        self.get(product_id).map_or(0, |e| e.amount)
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Returns the amount a single-unit add would produce, or `OutOfStock`.
    pub fn check_increment(&self, product_id: ProductId, stock: &Stock) -> CoreResult<i64> {
        let current = self.amount_of(product_id);
        let out_of_stock = |requested| CoreError::OutOfStock {
            product_id,
            available: stock.amount,
            requested,
        };

        // No stock can cover one unit past i64::MAX.
        let requested = current
            .checked_add(1)
            .ok_or_else(|| out_of_stock(i64::MAX))?;

        if !stock.allows(requested) {
            return Err(out_of_stock(requested));
        }

        Ok(requested)
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: its amount goes up by one, in place
    /// - Product not in cart: `product` is appended with amount 1
    ///
    /// `product` is only consulted for the append; when it is `None` and the
    /// entry is missing, the call fails with `EntryNotFound`.
    ///
    /// ## Returns
    /// The entry's new amount.
    pub fn increment(
        &mut self,
        product_id: ProductId,
        stock: &Stock,
        product: Option<&Product>,
    ) -> CoreResult<i64> {
        let requested = self.check_increment(product_id, stock)?;

        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == product_id) {
            entry.amount = requested;
            return Ok(requested);
        }

        let product = product.ok_or(CoreError::EntryNotFound(product_id))?;
        let mut entry = CartEntry::from_product(product, requested);
        // Keyed by the id the shopper asked for, whatever the catalog echoed.
        entry.id = product_id;
        self.entries.push(entry);

        Ok(requested)
    }

    /// Sets the absolute amount of a product already in the cart.
    ///
    /// The stock check runs before the lookup, so an over-stock request for
    /// a product that is not in the cart reports `OutOfStock`.
    pub fn set_amount(&mut self, product_id: ProductId, amount: i64, stock: &Stock) -> CoreResult<()> {
        validate_amount(amount)?;

        if !stock.allows(amount) {
            return Err(CoreError::OutOfStock {
                product_id,
                available: stock.amount,
                requested: amount,
            });
        }

        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == product_id)
            .ok_or(CoreError::EntryNotFound(product_id))?;
        entry.amount = amount;

        Ok(())
    }

    /// Removes a product from the cart and returns its entry.
    pub fn remove(&mut self, product_id: ProductId) -> CoreResult<CartEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == product_id)
            .ok_or(CoreError::EntryNotFound(product_id))?;

        Ok(self.entries.remove(index))
    }

    // -------------------------------------------------------------------------
    // Totals
    // -------------------------------------------------------------------------

    /// Number of distinct products (the header's cart size).
    pub fn item_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all amounts.
    pub fn total_quantity(&self) -> i64 {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Sum of every line total.
    pub fn subtotal(&self) -> Money {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cart totals summary for the cart page and header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    #[ts(type = "number")]
    pub total_quantity: i64,
    #[ts(type = "number")]
    pub subtotal: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
