//! Directory-backed key-value store.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

use crate::board::ports::{KeyValueStore, StoreError, StoreResult};

const VALUE_EXTENSION: &str = "json";

/// Key-value store holding one UTF-8 file per key inside a directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// failed write never leaves a truncated value behind.
#[derive(Debug)]
pub struct DirKeyValueStore {
    dir: Dir,
}

impl DirKeyValueStore {
    /// Opens the store at `path`, creating the directory when missing.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the directory cannot be created or opened.
    pub fn open(path: &Utf8Path) -> io::Result<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self { dir })
    }

    /// Wraps an already-open directory handle.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }
}

/// Returns whether `key` can name a value file in the store directory.
///
/// Keys are non-empty, limited to ASCII letters, digits, `.`, `_` and `-`,
/// and never start with `.`.
pub(crate) fn is_valid_storage_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-'))
}

fn file_name_for(key: &str) -> StoreResult<String> {
    if !is_valid_storage_key(key) {
        return Err(StoreError::unavailable(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("storage key '{key}' is not a valid file name"),
        )));
    }
    Ok(format!("{key}.{VALUE_EXTENSION}"))
}

impl KeyValueStore for DirKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let file_name = file_name_for(key)?;
        match self.dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::unavailable(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let file_name = file_name_for(key)?;
        let staging_name = format!(".{file_name}.partial");
        let written = self
            .dir
            .write(&staging_name, value)
            .and_then(|()| self.dir.rename(&staging_name, &self.dir, &file_name));
        if let Err(err) = written {
            // Best effort: the staging file may not exist if the write failed early.
            let _cleanup = self.dir.remove_file(&staging_name);
            return Err(StoreError::unavailable(err));
        }
        Ok(())
    }
}
