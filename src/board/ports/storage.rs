//! Key-value store port backing board persistence.

use std::sync::Arc;
use thiserror::Error;

/// Result type for key-value store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Local string key-value store.
///
/// Calls are synchronous: a write has completed or failed by the time it
/// returns.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `None` when nothing is stored under the key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the store cannot be read.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::QuotaExceeded`] when the value does not fit, or
    /// [`StoreError::Unavailable`] when the store cannot be written.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// Errors returned by key-value store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The write would exceed the store's capacity.
    #[error("storage quota exceeded: {required} bytes required, {limit} bytes available")]
    QuotaExceeded {
        /// Bytes the write needed.
        required: usize,
        /// Bytes the store allows.
        limit: usize,
    },

    /// The backing medium failed.
    #[error("storage unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a backing-medium error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
