//! Board configuration.
//!
//! Settings are read from a JSON document with camelCase keys. Every field
//! has a default, so an absent file or an empty object yields a usable
//! configuration:
//!
//! ```json
//! {
//!   "dataDir": "/home/analyst/.secboard",
//!   "storageKey": "secboard.tasks.v1",
//!   "exportDir": "/home/analyst/reports",
//!   "logLevel": "info"
//! }
//! ```

use crate::board::{
    adapters::{
        fs::{DirKeyValueStore, is_valid_storage_key},
        xlsx::XlsxReportWriter,
    },
    services::{DEFAULT_STORAGE_KEY, TaskBoard, TaskPersistence},
};
use crate::logging::{default_log_level, normalize_level};
use camino::Utf8PathBuf;
use cap_std::fs_utf8::Dir;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Default directory holding the persisted board.
pub const DEFAULT_DATA_DIR: &str = ".secboard";

/// Default directory receiving exported reports.
pub const DEFAULT_EXPORT_DIR: &str = ".";

/// Errors returned while loading or applying configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Read(#[source] io::Error),

    /// The configuration document is not valid.
    #[error("configuration is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The storage key is blank.
    #[error("storage key must not be empty")]
    EmptyStorageKey,

    /// The storage key cannot name a file in the data directory.
    #[error(
        "storage key `{0}` must use only ASCII letters, digits, '.', '_' or '-' and not start with '.'"
    )]
    InvalidStorageKey(String),

    /// The log level is not recognised.
    #[error("unsupported log level `{0}`")]
    UnknownLogLevel(String),

    /// A configured directory could not be opened.
    #[error("failed to open directory `{path}`: {source}")]
    Directory {
        /// Directory that failed to open.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Settings for opening a board on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardConfig {
    /// Directory holding the persisted board.
    pub data_dir: Utf8PathBuf,
    /// Namespace key the collection is stored under.
    pub storage_key: String,
    /// Directory receiving exported reports.
    pub export_dir: Utf8PathBuf,
    /// Log level for [`crate::logging::init_logging`].
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            data_dir: Utf8PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            export_dir: Utf8PathBuf::from(DEFAULT_EXPORT_DIR),
            log_level: default_log_level().to_owned(),
        }
    }
}

impl BoardConfig {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for invalid JSON, or the
    /// [`BoardConfig::validate`] error for invalid values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `file_name` from `dir`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file exists but cannot be read,
    /// or any [`BoardConfig::from_json_str`] error.
    pub fn load(dir: &Dir, file_name: &str) -> Result<Self, ConfigError> {
        match dir.read_to_string(file_name) {
            Ok(contents) => Self::from_json_str(&contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Read(err)),
        }
    }

    /// Checks the configured values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStorageKey`],
    /// [`ConfigError::InvalidStorageKey`] or [`ConfigError::UnknownLogLevel`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        if !is_valid_storage_key(&self.storage_key) {
            return Err(ConfigError::InvalidStorageKey(self.storage_key.clone()));
        }
        normalize_level(&self.log_level)
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))?;
        Ok(())
    }

    /// Opens a board persisted under [`BoardConfig::data_dir`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Directory`] when the data directory cannot be
    /// created or opened, or a [`BoardConfig::validate`] error.
    pub fn open_board<C>(&self, clock: Arc<C>) -> Result<TaskBoard<DirKeyValueStore, C>, ConfigError>
    where
        C: Clock,
    {
        self.validate()?;
        let store = DirKeyValueStore::open(&self.data_dir).map_err(|source| {
            ConfigError::Directory {
                path: self.data_dir.clone(),
                source,
            }
        })?;
        let persistence = TaskPersistence::with_key(Arc::new(store), self.storage_key.clone());
        Ok(TaskBoard::open(persistence, clock))
    }

    /// Opens the report writer for [`BoardConfig::export_dir`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Directory`] when the export directory cannot
    /// be created or opened.
    pub fn report_writer(&self) -> Result<XlsxReportWriter, ConfigError> {
        XlsxReportWriter::open(&self.export_dir).map_err(|source| ConfigError::Directory {
            path: self.export_dir.clone(),
            source,
        })
    }
}
