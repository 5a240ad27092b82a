//! # HTTP Catalog
//!
//! `CatalogService` over the storefront's REST API.
//!
//! ## Request Flow
//! ```text
//! stock(7)
//!    │
//!    ▼
//! GET {base}/stock/7  (timeout from CatalogConfig)
//!    │
//!    ├── transport error ──► Request / Timeout
//!    ├── 404             ──► NotFound { resource: "stock", id: 7 }
//!    ├── other non-2xx   ──► Status(code)
//!    ├── bad JSON        ──► Decode
//!    └── 200 + JSON      ──► Stock
//! ```

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use rocketshoes_core::{Product, ProductId, Stock};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::CatalogService;

/// Catalog client backed by `reqwest`.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    config: CatalogConfig,
}

impl HttpCatalog {
    /// Creates a client for the configured catalog.
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| CatalogError::ClientBuild(e.to_string()))?;

        Ok(HttpCatalog { client, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        id: ProductId,
    ) -> CatalogResult<T> {
        let url = self.config.endpoint(&format!("{}/{}", resource, id))?;
        debug!(url = %url, "Catalog request");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => return Err(CatalogError::NotFound { resource, id }),
            status => {
                warn!(url = %url, status = %status, "Catalog returned an error status");
                return Err(CatalogError::Status(status.as_u16()));
            }
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                self.transport_error(e)
            } else {
                CatalogError::Decode(e.to_string())
            }
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> CatalogError {
        if err.is_timeout() {
            CatalogError::Timeout(self.config.timeout().as_secs())
        } else {
            CatalogError::Request(err.to_string())
        }
    }
}

#[async_trait]
impl CatalogService for HttpCatalog {
    async fn stock(&self, product_id: ProductId) -> CatalogResult<Stock> {
        let mut stock: Stock = self.get_json("stock", product_id).await?;
        // Some catalog deployments omit the id in the stock record
        stock.product_id = product_id;
        Ok(stock)
    }

    async fn product(&self, product_id: ProductId) -> CatalogResult<Product> {
        self.get_json("products", product_id).await
    }
}
