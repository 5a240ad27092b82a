//! # Storefront Error Types
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  add_product(7)                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  try_add_product: Result<i64, CartError>                         │  │
//! │  │         │                                                        │  │
//! │  │  Catalog down?   ─── CatalogError ──┐                            │  │
//! │  │  Out of stock?   ─── CoreError ─────┼──► CartError               │  │
//! │  │  Write failed?   ─── StoreError ────┘        │                   │  │
//! │  └──────────────────────────────────────────────┼───────────────────┘  │
//! │                                                 ▼                       │
//! │                     warn!(...) + exactly one Notice                     │
//! │                                                                         │
//! │  Nothing is returned to the caller: it sees the new cart snapshot      │
//! │  and the notice, never the error itself.                               │
//! │                                                                         │
//! │  Startup failures (bad config, unusable data dir) are different: they  │
//! │  surface as AppError from `run` and end the process.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rocketshoes_catalog::CatalogError;
use rocketshoes_core::{CoreError, NoticeKind};
use rocketshoes_store::StoreError;
use thiserror::Error;

use crate::config::ConfigError;

/// Failure inside one cart operation.
#[derive(Debug, Error)]
pub enum CartError {
    /// A cart rule was violated (out of stock, entry not found, ...).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The catalog could not answer.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The cart could not be persisted.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl CartError {
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self, CartError::Core(CoreError::OutOfStock { .. }))
    }

    /// The notice to show for this failure.
    ///
    /// Out-of-stock has its own message; everything else collapses into the
    /// operation's generic failure notice.
    pub fn notice(&self, fallback: NoticeKind) -> NoticeKind {
        if self.is_out_of_stock() {
            NoticeKind::OutOfStock
        } else {
            fallback
        }
    }
}

/// Errors that stop the application before any cart operation runs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage unavailable: {0}")]
    Storage(#[from] StoreError),

    #[error("Catalog client unavailable: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}
