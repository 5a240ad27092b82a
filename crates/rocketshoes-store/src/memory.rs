//! # In-Memory Store
//!
//! Process-local storage. Values live as long as the `MemoryStore` does, so
//! it suits tests and throwaway sessions.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::{validate_key, KeyValueStore};

/// Key/value storage backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with one value.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.lock().insert(key.into(), value.into());
        store
    }

    /// Makes every subsequent `set` fail with `WriteRejected`.
    ///
    /// Handy for exercising write-failure paths.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // The map is only ever replaced entry-by-entry, so a poisoned lock still
    // guards consistent data.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        validate_key(key)?;
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        validate_key(key)?;

        if self.read_only {
            return Err(StoreError::WriteRejected(key.to_string()));
        }

        debug!(key = %key, bytes = value.len(), "Storing value in memory");
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
