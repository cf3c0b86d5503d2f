//! In-memory adapters for tests and ephemeral boards.

mod store;

pub use store::InMemoryKeyValueStore;
