//! Output port for rendered task reports.

use crate::board::domain::TaskReport;
use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Writes a report to durable output.
#[cfg_attr(test, mockall::automock)]
pub trait ReportWriter {
    /// Writes `report` as `file_name` and returns the written location.
    ///
    /// Implementations must not leave a partial file behind on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ReportWriteError`] when the document cannot be built or
    /// written.
    fn write(&self, report: &TaskReport, file_name: &str) -> Result<Utf8PathBuf, ReportWriteError>;
}

/// Errors returned while writing a report.
#[derive(Debug, Error)]
pub enum ReportWriteError {
    /// The document could not be rendered.
    #[error("failed to render report: {0}")]
    Render(Arc<dyn std::error::Error + Send + Sync>),

    /// The file could not be written.
    #[error("failed to write report file: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportWriteError {
    /// Wraps a document rendering error.
    pub fn render(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Render(Arc::new(err))
    }
}
