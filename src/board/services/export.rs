//! Report export orchestration.

use crate::board::{
    domain::{ExportScope, TaskCollection, TaskReport, report_file_name},
    ports::{ReportWriteError, ReportWriter},
};
use camino::Utf8PathBuf;
use log::info;
use mockable::Clock;
use thiserror::Error;

/// Errors returned by report export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No task matched the export scope; no file was produced.
    #[error("no tasks to export")]
    Empty,

    /// The report could not be written.
    #[error(transparent)]
    Write(#[from] ReportWriteError),
}

/// A report that has been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedReport {
    /// Location of the written file.
    pub path: Utf8PathBuf,
    /// Number of task rows in the report.
    pub row_count: usize,
}

/// Projects `tasks` per `scope` and hands the report to `writer`.
///
/// Dates in the report use the clock's local offset and the file is named
/// after the clock's local date. `writer` is not called when the selection is
/// empty.
///
/// # Errors
///
/// Returns [`ExportError::Empty`] when no task matches `scope`, or
/// [`ExportError::Write`] when the writer fails.
pub fn export_report(
    tasks: &TaskCollection,
    scope: ExportScope,
    clock: &impl Clock,
    writer: &impl ReportWriter,
) -> Result<ExportedReport, ExportError> {
    let now = clock.local();
    let report = TaskReport::project(tasks, scope, *now.offset());
    if report.is_empty() {
        info!("event=export status=empty scope={scope:?}");
        return Err(ExportError::Empty);
    }

    let file_name = report_file_name(now.date_naive());
    let path = writer.write(&report, &file_name)?;
    info!(
        "event=export status=ok scope={scope:?} rows={} path={path}",
        report.len()
    );
    Ok(ExportedReport {
        path,
        row_count: report.len(),
    })
}
