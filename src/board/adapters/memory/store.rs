//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::ports::{KeyValueStore, StoreError, StoreResult};

/// Thread-safe in-memory key-value store.
///
/// Clones share the same entries, so a test can keep a handle to the store a
/// board writes through. An optional quota caps the total bytes held across
/// all entries, mimicking a browser storage limit.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    state: Arc<RwLock<HashMap<String, String>>>,
    quota_bytes: Option<usize>,
}

impl InMemoryKeyValueStore {
    /// Creates an empty, unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that rejects writes beyond `limit` total bytes.
    #[must_use]
    pub fn with_quota(limit: usize) -> Self {
        Self {
            state: Arc::default(),
            quota_bytes: Some(limit),
        }
    }

    /// Creates a store pre-populated with `key` → `value`, ignoring quota.
    #[must_use]
    pub fn seeded(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut state) = store.state.write() {
            state.insert(key.to_owned(), value.to_owned());
        }
        store
    }
}

fn poisoned(err: &impl std::fmt::Display) -> StoreError {
    StoreError::unavailable(std::io::Error::other(err.to_string()))
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let state = self.state.read().map_err(|err| poisoned(&err))?;
        Ok(state.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut state = self.state.write().map_err(|err| poisoned(&err))?;
        if let Some(limit) = self.quota_bytes {
            let others: usize = state
                .iter()
                .filter(|(existing, _)| existing.as_str() != key)
                .map(|(existing, stored)| existing.len().saturating_add(stored.len()))
                .sum();
            let required = others
                .saturating_add(key.len())
                .saturating_add(value.len());
            if required > limit {
                return Err(StoreError::QuotaExceeded { required, limit });
            }
        }
        state.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
