//! # rocketshoes-catalog: Catalog Service Client
//!
//! Everything the cart needs from the remote catalog: the current stock
//! of a product and its display record.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog API (consumed)                             │
//! │                                                                         │
//! │  GET /stock/{id}      ──►  { "id": 1, "amount": 3 }                     │
//! │  GET /products/{id}   ──►  { "id": 1, "name": "...", "price": 179.9,    │
//! │                              "imageUrl": "...", ... }                   │
//! │                                                                         │
//! │  404 ──► CatalogError::NotFound                                         │
//! │  other non-2xx ──► CatalogError::Status                                 │
//! │  no answer within the timeout ──► CatalogError::Timeout                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart only depends on the [`CatalogService`] trait, so tests swap the
//! HTTP client for an in-process fake.

pub mod config;
pub mod error;
pub mod http;

pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use http::HttpCatalog;

use async_trait::async_trait;
use rocketshoes_core::{Product, ProductId, Stock};
use std::sync::Arc;

/// Read-only access to product data and stock levels.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Maximum purchasable quantity of a product, fetched fresh.
    async fn stock(&self, product_id: ProductId) -> CatalogResult<Stock>;

    /// Display record of a product.
    async fn product(&self, product_id: ProductId) -> CatalogResult<Product>;
}

#[async_trait]
impl<C: CatalogService + ?Sized> CatalogService for Arc<C> {
    async fn stock(&self, product_id: ProductId) -> CatalogResult<Stock> {
        (**self).stock(product_id).await
    }

    async fn product(&self, product_id: ProductId) -> CatalogResult<Product> {
        (**self).product(product_id).await
    }
}
