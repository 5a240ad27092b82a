//! # Catalog Error Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Response            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidBaseUrl │  │  Request        │  │  NotFound               │ │
//! │  │  ClientBuild    │  │  Timeout        │  │  Status                 │ │
//! │  │                 │  │                 │  │  Decode                 │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart treats every variant the same way (a collaborator failure), but
//! the variants keep enough context for the logs.

use rocketshoes_core::ProductId;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog request failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// The configured base URL cannot be used.
    #[error("Invalid catalog URL: {0}")]
    InvalidBaseUrl(String),

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Connection refused, DNS failure, reset, ...
    #[error("Catalog request failed: {0}")]
    Request(String),

    /// No response within the configured timeout.
    #[error("Catalog request timed out after {0} seconds")]
    Timeout(u64),

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// The catalog does not know the resource.
    #[error("{resource} {id} not found in catalog")]
    NotFound {
        resource: &'static str,
        id: ProductId,
    },

    /// Any other non-success status.
    #[error("Catalog answered with HTTP {0}")]
    Status(u16),

    /// The body did not match the expected shape.
    #[error("Malformed catalog response: {0}")]
    Decode(String),
}

impl From<url::ParseError> for CatalogError {
    fn from(err: url::ParseError) -> Self {
        CatalogError::InvalidBaseUrl(err.to_string())
    }
}
