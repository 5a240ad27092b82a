//! # Cart Store
//!
//! Owns the live cart, keeps the persisted copy in step with it and tells
//! the shopper what happened.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Operation                 Remote calls           Notice               │
//! │  ─────────                 ────────────           ──────               │
//! │                                                                         │
//! │  add_product(id) ────────► stock(id)              Added! / OutOfStock  │
//! │                            product(id) if new     / AddFailed          │
//! │                                                                         │
//! │  remove_product(id) ─────► (none)                 RemoveFailed only    │
//! │                                                                         │
//! │  update_product_amount ──► stock(id)              OutOfStock /         │
//! │                            (skipped if amount<=0) UpdateAmountFailed   │
//! │                                                   only                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Commit Protocol
//! ```text
//!   fetch (no lock held)          commit (one lock acquisition)
//!   ────────────────────          ──────────────────────────────
//!   stock, product   ──────────►  clone live cart
//!                                 apply rule against the clone
//!                                 write clone to storage
//!                                 swap clone in
//! ```
//!
//! The rule is re-applied against the live cart at commit time, so two
//! overlapping adds both land and a stale snapshot never overwrites a newer
//! cart. A failed write leaves the live cart untouched.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rocketshoes_catalog::CatalogService;
use rocketshoes_core::{
    Cart, CartEntry, CartTotals, CoreResult, NoticeKind, ProductId, CART_STORAGE_KEY,
};
use rocketshoes_store::KeyValueStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::CartError;
use crate::notifier::Notifier;

/// Request to set a product's absolute amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

/// The storefront cart and its collaborators.
///
/// ## Thread Safety
/// The cart sits behind a `Mutex`. The lock is never held across a catalog
/// request; every mutation takes it once, at commit time.
pub struct CartStore<C, S, N> {
    cart: Mutex<Cart>,
    catalog: C,
    storage: S,
    notifier: N,
}

impl<C, S, N> CartStore<C, S, N>
where
    C: CatalogService,
    S: KeyValueStore,
    N: Notifier,
{
    /// Creates the store, restoring the cart persisted under
    /// `@RocketShoes:cart`.
    ///
    /// A missing, unreadable or invalid blob yields an empty cart.
    pub fn new(catalog: C, storage: S, notifier: N) -> Self {
        let cart = restore(&storage);

        CartStore {
            cart: Mutex::new(cart),
            catalog,
            storage,
            notifier,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Snapshot of the current entries, in insertion order.
    pub fn cart(&self) -> Vec<CartEntry> {
        self.lock().entries().to_vec()
    }

    pub fn totals(&self) -> CartTotals {
        self.lock().totals()
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.lock())
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Adds one unit of a product.
    ///
    /// Always ends with exactly one notice: `ProductAdded` on success,
    /// `OutOfStock` when the stock does not cover the new amount, and
    /// `AddFailed` for anything else.
    pub async fn add_product(&self, product_id: ProductId) {
        debug!(product_id, "add_product");

        match self.try_add_product(product_id).await {
            Ok(amount) => {
                info!(product_id, amount, "Product added to cart");
                self.notifier.notify(NoticeKind::ProductAdded.into());
            }
            Err(err) => {
                warn!(product_id, error = %err, "Failed to add product");
                self.notifier.notify(err.notice(NoticeKind::AddFailed).into());
            }
        }
    }

    /// Removes a product from the cart.
    ///
    /// Silent on success; `RemoveFailed` when the product is not in the cart
    /// or the cart cannot be written.
    pub fn remove_product(&self, product_id: ProductId) {
        debug!(product_id, "remove_product");

        match self.commit(|cart| cart.remove(product_id)) {
            Ok(entry) => {
                info!(product_id, amount = entry.amount, "Product removed from cart");
            }
            Err(err) => {
                warn!(product_id, error = %err, "Failed to remove product");
                self.notifier
                    .notify(err.notice(NoticeKind::RemoveFailed).into());
            }
        }
    }

    /// Sets a product's amount.
    ///
    /// Amounts of zero or less are ignored without contacting the catalog.
    /// Silent on success; otherwise `OutOfStock` or `UpdateAmountFailed`.
    pub async fn update_product_amount(&self, request: UpdateProductAmount) {
        let UpdateProductAmount { product_id, amount } = request;
        debug!(product_id, amount, "update_product_amount");

        if amount <= 0 {
            debug!(product_id, amount, "Ignoring non-positive amount");
            return;
        }

        match self.try_update_product_amount(product_id, amount).await {
            Ok(()) => {
                info!(product_id, amount, "Product amount updated");
            }
            Err(err) => {
                warn!(product_id, amount, error = %err, "Failed to update product amount");
                self.notifier
                    .notify(err.notice(NoticeKind::UpdateAmountFailed).into());
            }
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn try_add_product(&self, product_id: ProductId) -> Result<i64, CartError> {
        let stock = self.catalog.stock(product_id).await?;

        // Checked against the snapshot first so an out-of-stock add never
        // reaches the product endpoint.
        let is_new = {
            let cart = self.lock();
            cart.check_increment(product_id, &stock)?;
            !cart.contains(product_id)
        };

        let product = if is_new {
            Some(self.catalog.product(product_id).await?)
        } else {
            None
        };

        self.commit(|cart| cart.increment(product_id, &stock, product.as_ref()))
    }

    async fn try_update_product_amount(
        &self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<(), CartError> {
        let stock = self.catalog.stock(product_id).await?;
        self.commit(|cart| cart.set_amount(product_id, amount, &stock))
    }

    /// Applies a mutation to a copy of the live cart, persists the copy and
    /// only then makes it live.
    fn commit<T, F>(&self, apply: F) -> Result<T, CartError>
    where
        F: FnOnce(&mut Cart) -> CoreResult<T>,
    {
        let mut live = self.lock();
        let mut next = live.clone();

        let value = apply(&mut next)?;

        let json = next.to_json()?;
        self.storage.set(CART_STORAGE_KEY, &json)?;

        *live = next;
        Ok(value)
    }

    // Mutations swap in a fully built cart, so a poisoned lock still guards
    // a consistent value.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Reads the persisted cart, falling back to an empty one.
fn restore<S: KeyValueStore>(storage: &S) -> Cart {
    let blob = match storage.get(CART_STORAGE_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            debug!("No stored cart, starting empty");
            return Cart::new();
        }
        Err(err) => {
            warn!(error = %err, "Could not read stored cart, starting empty");
            return Cart::new();
        }
    };

    match Cart::from_json(&blob) {
        Ok(cart) => {
            info!(items = cart.item_count(), "Restored stored cart");
            cart
        }
        Err(err) => {
            warn!(error = %err, "Stored cart is invalid, starting empty");
            Cart::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::RecordingNotifier;
    use async_trait::async_trait;
    use rocketshoes_catalog::{CatalogError, CatalogResult};
    use rocketshoes_core::{Money, Product, Stock};
    use rocketshoes_store::{FileStore, MemoryStore};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    // =========================================================================
    // Fixtures
    // =========================================================================

    #[derive(Default)]
    struct FakeCatalog {
        stock: Mutex<HashMap<ProductId, i64>>,
        products: Mutex<HashMap<ProductId, Product>>,
        fail_stock: AtomicBool,
        fail_product: AtomicBool,
        stock_calls: AtomicUsize,
        product_calls: AtomicUsize,
    }

    impl FakeCatalog {
        fn new() -> Self {
            Self::default()
        }

        fn with_product(self, id: ProductId, stock: i64) -> Self {
            self.products.lock().unwrap().insert(id, product(id));
            self.with_stock(id, stock)
        }

        fn with_stock(self, id: ProductId, stock: i64) -> Self {
            self.stock.lock().unwrap().insert(id, stock);
            self
        }

        fn stock_calls(&self) -> usize {
            self.stock_calls.load(Ordering::SeqCst)
        }

        fn product_calls(&self) -> usize {
            self.product_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CatalogService for FakeCatalog {
        async fn stock(&self, product_id: ProductId) -> CatalogResult<Stock> {
            self.stock_calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;

            if self.fail_stock.load(Ordering::SeqCst) {
                return Err(CatalogError::Status(500));
            }
            let amount = self.stock.lock().unwrap().get(&product_id).copied();
            amount
                .map(|amount| Stock::new(product_id, amount))
                .ok_or(CatalogError::NotFound {
                    resource: "stock",
                    id: product_id,
                })
        }

        async fn product(&self, product_id: ProductId) -> CatalogResult<Product> {
            self.product_calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;

            if self.fail_product.load(Ordering::SeqCst) {
                return Err(CatalogError::Request("connection reset".to_string()));
            }
            let found = self.products.lock().unwrap().get(&product_id).cloned();
            found.ok_or(CatalogError::NotFound {
                resource: "products",
                id: product_id,
            })
        }
    }

    type TestStore = CartStore<Arc<FakeCatalog>, Arc<MemoryStore>, Arc<RecordingNotifier>>;

    struct Harness {
        store: TestStore,
        catalog: Arc<FakeCatalog>,
        storage: Arc<MemoryStore>,
        notifier: Arc<RecordingNotifier>,
    }

    fn harness(catalog: FakeCatalog, storage: MemoryStore) -> Harness {
        let catalog = Arc::new(catalog);
        let storage = Arc::new(storage);
        let notifier = Arc::new(RecordingNotifier::new());
        let store = CartStore::new(catalog.clone(), storage.clone(), notifier.clone());

        Harness {
            store,
            catalog,
            storage,
            notifier,
        }
    }

    fn product(id: ProductId) -> Product {
        Product {
            id,
            name: format!("Tênis {}", id),
            price: Money::from_cents(17990),
            image_url: format!("https://example.com/tenis{}.jpg", id),
        }
    }

    fn entry(id: ProductId, amount: i64) -> CartEntry {
        CartEntry::from_product(&product(id), amount)
    }

    fn stored(entries: &[CartEntry]) -> MemoryStore {
        let json = Cart::from_entries(entries.to_vec())
            .unwrap()
            .to_json()
            .unwrap();
        MemoryStore::with_value(CART_STORAGE_KEY, json)
    }

    fn persisted(storage: &MemoryStore) -> Option<Vec<CartEntry>> {
        storage
            .get(CART_STORAGE_KEY)
            .unwrap()
            .map(|json| Cart::from_json(&json).unwrap().into_entries())
    }

    fn amounts(entries: &[CartEntry]) -> Vec<(ProductId, i64)> {
        entries.iter().map(|e| (e.id, e.amount)).collect()
    }

    // =========================================================================
    // Startup
    // =========================================================================

    #[test]
    fn test_starts_empty_without_stored_cart() {
        let h = harness(FakeCatalog::new(), MemoryStore::new());

        assert!(h.store.cart().is_empty());
        assert!(h.notifier.is_empty());
    }

    #[test]
    fn test_restores_stored_cart() {
        let h = harness(FakeCatalog::new(), stored(&[entry(1, 2), entry(4, 1)]));

        assert_eq!(amounts(&h.store.cart()), vec![(1, 2), (4, 1)]);
        assert_eq!(h.store.totals().subtotal, Money::from_cents(17990 * 3));
    }

    #[test]
    fn test_malformed_stored_cart_starts_empty() {
        let h = harness(
            FakeCatalog::new(),
            MemoryStore::with_value(CART_STORAGE_KEY, "{ definitely not a cart"),
        );
        assert!(h.store.cart().is_empty());
    }

    #[test]
    fn test_stored_cart_breaking_invariants_starts_empty() {
        let mut zero = entry(2, 1);
        zero.amount = 0;
        let json = serde_json::to_string(&vec![entry(1, 1), zero]).unwrap();

        let h = harness(
            FakeCatalog::new(),
            MemoryStore::with_value(CART_STORAGE_KEY, json),
        );
        assert!(h.store.cart().is_empty());

        let duplicated = serde_json::to_string(&vec![entry(1, 1), entry(1, 2)]).unwrap();
        let h = harness(
            FakeCatalog::new(),
            MemoryStore::with_value(CART_STORAGE_KEY, duplicated),
        );
        assert!(h.store.cart().is_empty());
    }

    // =========================================================================
    // add_product
    // =========================================================================

    #[tokio::test]
    async fn test_add_new_product() {
        let h = harness(FakeCatalog::new().with_product(1, 5), MemoryStore::new());

        h.store.add_product(1).await;

        let cart = h.store.cart();
        assert_eq!(cart, vec![entry(1, 1)]);
        assert_eq!(persisted(&h.storage), Some(cart));
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::ProductAdded]);
        assert_eq!(h.catalog.product_calls(), 1);
    }

    #[tokio::test]
    async fn test_add_existing_product_increments_in_place() {
        let h = harness(
            FakeCatalog::new().with_product(1, 5).with_product(2, 5),
            stored(&[entry(1, 2), entry(2, 1)]),
        );

        h.store.add_product(1).await;

        assert_eq!(amounts(&h.store.cart()), vec![(1, 3), (2, 1)]);
        assert_eq!(persisted(&h.storage), Some(h.store.cart()));
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::ProductAdded]);
        // Existing entries keep their frozen product data.
        assert_eq!(h.catalog.product_calls(), 0);
    }

    #[tokio::test]
    async fn test_add_appends_new_products_in_order() {
        let h = harness(
            FakeCatalog::new().with_product(1, 5).with_product(2, 5),
            MemoryStore::new(),
        );

        h.store.add_product(2).await;
        h.store.add_product(1).await;
        h.store.add_product(2).await;

        assert_eq!(amounts(&h.store.cart()), vec![(2, 2), (1, 1)]);
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::ProductAdded; 3]);
    }

    #[tokio::test]
    async fn test_add_beyond_stock_is_rejected() {
        let h = harness(
            FakeCatalog::new().with_product(1, 5),
            stored(&[entry(1, 5)]),
        );
        let before = h.storage.get(CART_STORAGE_KEY).unwrap();

        h.store.add_product(1).await;

        assert_eq!(amounts(&h.store.cart()), vec![(1, 5)]);
        assert_eq!(h.storage.get(CART_STORAGE_KEY).unwrap(), before);
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::OutOfStock]);
        assert_eq!(h.catalog.product_calls(), 0);
    }

    #[tokio::test]
    async fn test_add_with_zero_stock() {
        let h = harness(FakeCatalog::new().with_product(3, 0), MemoryStore::new());

        h.store.add_product(3).await;

        assert!(h.store.cart().is_empty());
        assert_eq!(persisted(&h.storage), None);
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::OutOfStock]);
    }

    #[tokio::test]
    async fn test_add_fails_when_stock_unavailable() {
        let catalog = FakeCatalog::new().with_product(1, 5);
        catalog.fail_stock.store(true, Ordering::SeqCst);
        let h = harness(catalog, stored(&[entry(1, 1)]));

        h.store.add_product(1).await;

        assert_eq!(amounts(&h.store.cart()), vec![(1, 1)]);
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::AddFailed]);
    }

    #[tokio::test]
    async fn test_add_fails_when_product_unavailable() {
        let catalog = FakeCatalog::new().with_product(1, 5);
        catalog.fail_product.store(true, Ordering::SeqCst);
        let h = harness(catalog, MemoryStore::new());

        h.store.add_product(1).await;

        assert!(h.store.cart().is_empty());
        assert_eq!(persisted(&h.storage), None);
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::AddFailed]);
    }

    #[tokio::test]
    async fn test_add_unknown_product() {
        // Stock exists but the catalog has no product record.
        let h = harness(FakeCatalog::new().with_stock(9, 3), MemoryStore::new());

        h.store.add_product(9).await;

        assert!(h.store.cart().is_empty());
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::AddFailed]);
    }

    #[tokio::test]
    async fn test_add_fails_when_write_rejected() {
        let h = harness(
            FakeCatalog::new().with_product(1, 5),
            stored(&[entry(1, 1)]).read_only(),
        );

        h.store.add_product(1).await;

        assert_eq!(amounts(&h.store.cart()), vec![(1, 1)]);
        assert_eq!(amounts(&persisted(&h.storage).unwrap()), vec![(1, 1)]);
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::AddFailed]);
    }

    #[tokio::test]
    async fn test_add_past_largest_amount() {
        let h = harness(
            FakeCatalog::new().with_product(1, i64::MAX),
            MemoryStore::new(),
        );

        h.store.add_product(1).await;
        h.store.update_product_amount(update(1, i64::MAX)).await;
        h.store.add_product(1).await;

        assert_eq!(amounts(&h.store.cart()), vec![(1, i64::MAX)]);
        assert_eq!(
            h.notifier.kinds(),
            vec![NoticeKind::ProductAdded, NoticeKind::OutOfStock]
        );
    }

    #[tokio::test]
    async fn test_concurrent_adds_both_land() {
        let h = harness(FakeCatalog::new().with_product(1, 5), MemoryStore::new());

        tokio::join!(h.store.add_product(1), h.store.add_product(1));

        assert_eq!(amounts(&h.store.cart()), vec![(1, 2)]);
        assert_eq!(persisted(&h.storage), Some(h.store.cart()));
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::ProductAdded; 2]);
    }

    #[tokio::test]
    async fn test_concurrent_adds_respect_stock() {
        let h = harness(FakeCatalog::new().with_product(1, 1), MemoryStore::new());

        tokio::join!(h.store.add_product(1), h.store.add_product(1));

        assert_eq!(amounts(&h.store.cart()), vec![(1, 1)]);

        let mut kinds = h.notifier.kinds();
        kinds.sort_by_key(|k| *k != NoticeKind::ProductAdded);
        assert_eq!(kinds, vec![NoticeKind::ProductAdded, NoticeKind::OutOfStock]);
    }

    // =========================================================================
    // remove_product
    // =========================================================================

    #[test]
    fn test_remove_product() {
        let h = harness(FakeCatalog::new(), stored(&[entry(1, 2), entry(4, 1)]));

        h.store.remove_product(1);

        assert_eq!(amounts(&h.store.cart()), vec![(4, 1)]);
        assert_eq!(persisted(&h.storage), Some(h.store.cart()));
        assert!(h.notifier.is_empty());
        assert_eq!(h.catalog.stock_calls(), 0);
    }

    #[test]
    fn test_remove_missing_product() {
        let h = harness(FakeCatalog::new(), stored(&[entry(4, 1)]));

        h.store.remove_product(7);

        assert_eq!(amounts(&h.store.cart()), vec![(4, 1)]);
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::RemoveFailed]);
    }

    #[test]
    fn test_remove_twice() {
        let h = harness(FakeCatalog::new(), stored(&[entry(1, 1)]));

        h.store.remove_product(1);
        h.store.remove_product(1);

        assert!(h.store.cart().is_empty());
        assert_eq!(persisted(&h.storage), Some(vec![]));
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::RemoveFailed]);
    }

    #[test]
    fn test_remove_fails_when_write_rejected() {
        let h = harness(FakeCatalog::new(), stored(&[entry(1, 1)]).read_only());

        h.store.remove_product(1);

        assert_eq!(amounts(&h.store.cart()), vec![(1, 1)]);
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::RemoveFailed]);
    }

    // =========================================================================
    // update_product_amount
    // =========================================================================

    fn update(product_id: ProductId, amount: i64) -> UpdateProductAmount {
        UpdateProductAmount { product_id, amount }
    }

    #[tokio::test]
    async fn test_update_amount() {
        let h = harness(
            FakeCatalog::new().with_product(1, 5),
            stored(&[entry(1, 1), entry(2, 1)]),
        );

        h.store.update_product_amount(update(1, 4)).await;

        assert_eq!(amounts(&h.store.cart()), vec![(1, 4), (2, 1)]);
        assert_eq!(persisted(&h.storage), Some(h.store.cart()));
        assert!(h.notifier.is_empty());
    }

    #[tokio::test]
    async fn test_update_non_positive_amount_is_ignored() {
        let h = harness(FakeCatalog::new().with_product(1, 5), stored(&[entry(1, 2)]));

        h.store.update_product_amount(update(1, 0)).await;
        h.store.update_product_amount(update(1, -3)).await;

        assert_eq!(amounts(&h.store.cart()), vec![(1, 2)]);
        assert!(h.notifier.is_empty());
        assert_eq!(h.catalog.stock_calls(), 0);
    }

    #[tokio::test]
    async fn test_update_beyond_stock() {
        let h = harness(FakeCatalog::new().with_product(1, 5), stored(&[entry(1, 2)]));

        h.store.update_product_amount(update(1, 6)).await;

        assert_eq!(amounts(&h.store.cart()), vec![(1, 2)]);
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::OutOfStock]);
    }

    #[tokio::test]
    async fn test_update_to_exact_stock() {
        let h = harness(FakeCatalog::new().with_product(1, 5), stored(&[entry(1, 2)]));

        h.store.update_product_amount(update(1, 5)).await;

        assert_eq!(amounts(&h.store.cart()), vec![(1, 5)]);
        assert!(h.notifier.is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_entry() {
        let h = harness(FakeCatalog::new().with_product(8, 5), stored(&[entry(1, 2)]));

        h.store.update_product_amount(update(8, 2)).await;

        assert_eq!(amounts(&h.store.cart()), vec![(1, 2)]);
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::UpdateAmountFailed]);
    }

    #[tokio::test]
    async fn test_update_missing_entry_beyond_stock() {
        let h = harness(FakeCatalog::new().with_product(8, 5), stored(&[entry(1, 2)]));

        h.store.update_product_amount(update(8, 6)).await;

        assert_eq!(amounts(&h.store.cart()), vec![(1, 2)]);
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::OutOfStock]);
    }

    #[tokio::test]
    async fn test_huge_amount_keeps_totals_bounded() {
        let h = harness(
            FakeCatalog::new().with_product(1, i64::MAX),
            MemoryStore::new(),
        );

        h.store.add_product(1).await;
        h.store
            .update_product_amount(update(1, 1_000_000_000_000_000))
            .await;

        let totals = h.store.totals();
        assert_eq!(totals.total_quantity, 1_000_000_000_000_000);
        assert_eq!(totals.subtotal, Money::from_cents(i64::MAX));
    }

    #[tokio::test]
    async fn test_update_fails_when_stock_unavailable() {
        let catalog = FakeCatalog::new().with_product(1, 5);
        catalog.fail_stock.store(true, Ordering::SeqCst);
        let h = harness(catalog, stored(&[entry(1, 2)]));

        h.store.update_product_amount(update(1, 3)).await;

        assert_eq!(amounts(&h.store.cart()), vec![(1, 2)]);
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::UpdateAmountFailed]);
    }

    #[tokio::test]
    async fn test_update_fails_when_write_rejected() {
        let h = harness(
            FakeCatalog::new().with_product(1, 5),
            stored(&[entry(1, 2)]).read_only(),
        );

        h.store.update_product_amount(update(1, 3)).await;

        assert_eq!(amounts(&h.store.cart()), vec![(1, 2)]);
        assert_eq!(h.notifier.kinds(), vec![NoticeKind::UpdateAmountFailed]);
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    #[tokio::test]
    async fn test_cart_survives_restart_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Arc::new(FakeCatalog::new().with_product(1, 5).with_product(2, 5));

        {
            let store = CartStore::new(
                catalog.clone(),
                FileStore::open(dir.path()).unwrap(),
                RecordingNotifier::new(),
            );
            store.add_product(1).await;
            store.add_product(2).await;
            store.update_product_amount(update(2, 3)).await;
            store.remove_product(1);
        }

        let reopened = CartStore::new(
            catalog,
            FileStore::open(dir.path()).unwrap(),
            RecordingNotifier::new(),
        );
        assert_eq!(reopened.cart(), vec![entry(2, 3)]);
    }
}
