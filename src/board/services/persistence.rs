//! Serialization of the task collection to a key-value store.

use crate::board::{
    domain::TaskCollection,
    ports::{KeyValueStore, StoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Namespace key the board is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "secboard.tasks.v1";

/// Errors raised while loading or saving the board. None of them is fatal:
/// the in-memory collection stays authoritative for the session.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The store could not be read.
    #[error("failed to read stored tasks: {0}")]
    Read(#[source] StoreError),

    /// The stored payload is not a valid task collection.
    #[error("stored tasks are malformed: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The collection could not be serialized.
    #[error("failed to encode tasks: {0}")]
    Encode(#[source] serde_json::Error),

    /// The store rejected the write.
    #[error("failed to save tasks: {0}")]
    Write(#[source] StoreError),
}

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Loads and saves the whole task collection under one key.
#[derive(Debug)]
pub struct TaskPersistence<S>
where
    S: KeyValueStore,
{
    store: Arc<S>,
    key: String,
}

impl<S> Clone for TaskPersistence<S>
where
    S: KeyValueStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            key: self.key.clone(),
        }
    }
}

impl<S> TaskPersistence<S>
where
    S: KeyValueStore,
{
    /// Creates a persistence service using [`DEFAULT_STORAGE_KEY`].
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    /// Creates a persistence service storing under `key`.
    #[must_use]
    pub fn with_key(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Returns the namespace key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the stored collection. A missing key yields an empty
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Read`] when the store fails and
    /// [`PersistenceError::Malformed`] when the payload cannot be decoded,
    /// including payloads that repeat a task identifier.
    pub fn load(&self) -> PersistenceResult<TaskCollection> {
        let Some(raw) = self.store.get(&self.key).map_err(PersistenceError::Read)? else {
            return Ok(TaskCollection::new());
        };
        serde_json::from_str(&raw).map_err(PersistenceError::Malformed)
    }

    /// Replaces the stored collection with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Write`] when the store rejects the write.
    pub fn save(&self, tasks: &TaskCollection) -> PersistenceResult<()> {
        let payload = serde_json::to_string(tasks).map_err(PersistenceError::Encode)?;
        self.store
            .set(&self.key, &payload)
            .map_err(PersistenceError::Write)
    }
}
