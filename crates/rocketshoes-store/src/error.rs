//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the key and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartError (storefront app)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Generic "failed to ..." notice                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    ///
    /// ## When This Occurs
    /// - Data directory is read-only
    /// - Disk full
    /// - Stored value is not valid UTF-8
    #[error("Storage I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// No platform data directory could be determined.
    #[error("Could not determine a data directory")]
    DataDirUnavailable,

    /// The key is empty or blank.
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),

    /// The backend refused the write (used by in-memory backends).
    #[error("Storage write rejected for key '{0}'")]
    WriteRejected(String),
}

impl StoreError {
    /// Wraps an I/O error with the key it happened on.
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            key: key.into(),
            source,
        }
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_includes_key() {
        let err = StoreError::io(
            "@RocketShoes:cart",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "Storage I/O failed for key '@RocketShoes:cart': denied"
        );
    }
}
