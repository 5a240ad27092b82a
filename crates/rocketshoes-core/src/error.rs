//! # Error Types
//!
//! Domain-specific error types for rocketshoes-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rocketshoes-core errors (this file)                                   │
//! │  ├── CoreError        - Cart rule violations                           │
//! │  └── ValidationError  - Bad values (mostly from a stored blob)         │
//! │                                                                         │
//! │  rocketshoes-store   └── StoreError    - Storage read/write failures   │
//! │  rocketshoes-catalog └── CatalogError  - Catalog request failures      │
//! │                                                                         │
//! │  storefront app      └── CartError     - Unifies all of the above      │
//! │                                                                         │
//! │  Flow: CoreError/StoreError/CatalogError → CartError → Notice          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these cross the `CartStore` boundary. The store absorbs them and
//! emits a single notice instead.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Cart rule violations and domain failures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Requested amount exceeds the stock reported by the catalog.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart has 5 × product 1
    ///      │
    ///      ▼
    /// Click "add" again → requested 6
    ///      │
    ///      ▼
    /// Catalog stock: 5
    ///      │
    ///      ▼
    /// OutOfStock { product_id: 1, available: 5, requested: 6 }
    ///      │
    ///      ▼
    /// UI shows: "Requested amount is out of stock"
    /// ```
    #[error("Product {product_id} out of stock: available {available}, requested {requested}")]
    OutOfStock {
        product_id: ProductId,
        available: i64,
        requested: i64,
    },

    /// No cart entry carries the given product id.
    #[error("Product {0} is not in the cart")]
    EntryNotFound(ProductId),

    /// The persisted cart blob could not be decoded or encoded.
    #[error("Malformed cart data: {0}")]
    MalformedCart(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::MalformedCart(err.to_string())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Value-level validation failures.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Duplicate value (e.g., the same product id twice in one cart).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
