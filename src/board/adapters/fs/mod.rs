//! Filesystem adapters scoped to a capability directory handle.

mod store;

pub use store::DirKeyValueStore;
pub(crate) use store::is_valid_storage_key;
