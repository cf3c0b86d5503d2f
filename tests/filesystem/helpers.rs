//! Scratch directories for filesystem tests.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use eyre::WrapErr;

/// Uniquely named directory under the system temp directory.
///
/// The directory and its contents are removed on drop.
pub struct ScratchDir {
    parent: Dir,
    name: String,
    path: Utf8PathBuf,
}

impl ScratchDir {
    /// Creates a fresh scratch directory tagged with `label`.
    pub fn new(label: &str) -> eyre::Result<Self> {
        let temp_dir = Utf8PathBuf::try_from(std::env::temp_dir())
            .map_err(|err| eyre::eyre!("temp directory path is not valid UTF-8: {err}"))?;
        let parent = Dir::open_ambient_dir(&temp_dir, ambient_authority())
            .wrap_err("open system temp directory")?;
        let name = format!("secboard_{label}_{}", uuid::Uuid::new_v4());
        parent
            .create_dir(&name)
            .wrap_err_with(|| format!("create scratch directory {name}"))?;
        let path = temp_dir.join(&name);
        Ok(Self { parent, name, path })
    }

    /// Absolute path of the scratch directory.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Opens a capability handle on the scratch directory.
    pub fn open(&self) -> eyre::Result<Dir> {
        self.parent
            .open_dir(&self.name)
            .wrap_err("open scratch directory")
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = self.parent.remove_dir_all(&self.name);
    }
}
