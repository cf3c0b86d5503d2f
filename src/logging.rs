//! Process-wide logging bootstrap.
//!
//! Library code logs through the `log` facade with `event=... status=...`
//! messages. Hosts that want those records on disk call [`init_logging`]
//! once; it installs a size-rotated `flexi_logger` file backend.
//!
//! Initialization is idempotent for identical settings and rejects a second
//! call with a different level or directory.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use thiserror::Error;

const LOG_FILE_BASENAME: &str = "secboard";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: Utf8PathBuf,
    _logger: LoggerHandle,
}

/// Errors returned while configuring logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The level is not one of `trace|debug|info|warn|error`.
    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    UnsupportedLevel(String),

    /// The log directory is empty or relative.
    #[error("log directory must be an absolute path, got `{0}`")]
    RelativeDirectory(Utf8PathBuf),

    /// Logging is already active with different settings.
    #[error("logging already initialized with level `{level}` at `{log_dir}`")]
    AlreadyInitialized {
        /// Active level.
        level: &'static str,
        /// Active directory.
        log_dir: Utf8PathBuf,
    },

    /// The log directory could not be created.
    #[error("failed to create log directory `{path}`: {source}")]
    CreateDirectory {
        /// Directory that could not be created.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The logger backend failed to start.
    #[error("failed to start logger: {0}")]
    Backend(#[from] flexi_logger::FlexiLoggerError),
}

/// Starts file logging at `level` under `log_dir`.
///
/// # Errors
///
/// Returns [`LoggingError`] when the level is unknown, the directory is not
/// absolute or cannot be created, logging is already active with other
/// settings, or the backend fails to start.
pub fn init_logging(level: &str, log_dir: &Utf8Path) -> Result<(), LoggingError> {
    let normalized_level = normalize_level(level)?;
    if !log_dir.is_absolute() {
        return Err(LoggingError::RelativeDirectory(log_dir.to_owned()));
    }

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(normalized_level, log_dir))?;
    if state.level != normalized_level || state.log_dir != log_dir {
        return Err(LoggingError::AlreadyInitialized {
            level: state.level,
            log_dir: state.log_dir.clone(),
        });
    }
    Ok(())
}

/// Returns the active `(level, directory)`, or `None` before
/// [`init_logging`] succeeds.
#[must_use]
pub fn logging_status() -> Option<(&'static str, Utf8PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

/// Returns `debug` for debug builds and `info` otherwise.
#[must_use]
pub const fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "info" }
}

/// Maps a user-supplied level onto its canonical spelling.
///
/// # Errors
///
/// Returns [`LoggingError::UnsupportedLevel`] for unknown levels.
pub fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        _ => Err(LoggingError::UnsupportedLevel(level.to_owned())),
    }
}

fn start_logger(level: &'static str, log_dir: &Utf8Path) -> Result<LoggingState, LoggingError> {
    Dir::create_ambient_dir_all(log_dir, ambient_authority()).map_err(|source| {
        LoggingError::CreateDirectory {
            path: log_dir.to_owned(),
            source,
        }
    })?;

    let logger = Logger::try_with_str(level)?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir.as_std_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;

    info!(
        "event=logging_init status=ok level={level} log_dir={log_dir} version={}",
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        level,
        log_dir: log_dir.to_owned(),
        _logger: logger,
    })
}
