//! # rocketshoes-store: Persistence Store for the RocketShoes Cart
//!
//! A tiny synchronous key/value store. The cart keeps exactly one value in
//! it: the serialized entry list under `@RocketShoes:cart`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     RocketShoes Data Flow                               │
//! │                                                                         │
//! │  CartStore (startup / after every commit)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                rocketshoes-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐   ┌──────────────┐  ┌──────────────┐  │   │
//! │  │   │   KeyValueStore    │◄──│ MemoryStore  │  │  FileStore   │  │   │
//! │  │   │   get(key)         │   │ (tests, one  │  │ (one file    │  │   │
//! │  │   │   set(key, value)  │◄──│  session)    │  │  per key)    │  │   │
//! │  │   └────────────────────┘   └──────────────┘  └──────┬───────┘  │   │
//! │  └──────────────────────────────────────────────────────┼──────────┘   │
//! │                                                         ▼               │
//! │                   ~/.local/share/rocketshoes/<key>.json                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use rocketshoes_store::{KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set("@RocketShoes:cart", "[]").unwrap();
//! assert_eq!(store.get("@RocketShoes:cart").unwrap().as_deref(), Some("[]"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod file;
pub mod memory;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Synchronous string key/value storage.
///
/// Mirrors what a browser's local storage offers: reads and writes complete
/// before returning and there is no retry policy.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}

/// Rejects keys no backend can hold.
pub(crate) fn validate_key(key: &str) -> StoreResult<()> {
    if key.trim().is_empty() {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}
