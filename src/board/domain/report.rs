//! Tabular projection of the board used for spreadsheet export.

use super::{Stage, Task};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Name of the single worksheet in an exported report.
pub const SHEET_NAME: &str = "Tasks";

/// Column headers in display order.
pub const REPORT_COLUMNS: [&str; 8] = [
    "Task Name",
    "Category",
    "Priority",
    "Stage",
    "Due Date",
    "Notes",
    "Created",
    "Completed",
];

const COLUMN_PADDING: usize = 2;
const DATE_DISPLAY_FORMAT: &str = "%b %-d, %Y";
const TIMESTAMP_DISPLAY_FORMAT: &str = "%b %-d, %Y %H:%M";

/// Which tasks an export covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportScope {
    /// Every task on the board.
    All,
    /// Only tasks in [`Stage::Completed`].
    CompletedOnly,
}

impl ExportScope {
    /// Returns `true` when `task` belongs in this scope.
    #[must_use]
    pub fn includes(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::CompletedOnly => task.stage() == Stage::Completed,
        }
    }
}

/// One row per task, one cell per [`REPORT_COLUMNS`] entry.
pub type ReportRow = [String; 8];

/// Display-ready rows for a spreadsheet export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    rows: Vec<ReportRow>,
}

impl TaskReport {
    /// Projects the tasks selected by `scope` into report rows.
    ///
    /// Timestamps are rendered in `offset`; absent values become empty cells.
    #[must_use]
    pub fn project<'a>(
        tasks: impl IntoIterator<Item = &'a Task>,
        scope: ExportScope,
        offset: FixedOffset,
    ) -> Self {
        let rows = tasks
            .into_iter()
            .filter(|task| scope.includes(task))
            .map(|task| project_row(task, offset))
            .collect();
        Self { rows }
    }

    /// Returns `true` when no task was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns the sheet name.
    #[must_use]
    pub const fn sheet_name(&self) -> &'static str {
        SHEET_NAME
    }

    /// Returns the column headers.
    #[must_use]
    pub const fn headers(&self) -> &'static [&'static str; 8] {
        &REPORT_COLUMNS
    }

    /// Returns the data rows.
    #[must_use]
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Returns each column's width in characters: the widest cell in the
    /// column, header included, plus padding.
    #[must_use]
    pub fn column_widths(&self) -> [usize; 8] {
        let mut widths = REPORT_COLUMNS.map(|header| header.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths.map(|width| width.saturating_add(COLUMN_PADDING))
    }
}

/// Returns the export file name for `today`, e.g.
/// `cybersec-tasks-2026-03-09.xlsx`.
#[must_use]
pub fn report_file_name(today: NaiveDate) -> String {
    format!("cybersec-tasks-{}.xlsx", today.format("%Y-%m-%d"))
}

fn project_row(task: &Task, offset: FixedOffset) -> ReportRow {
    [
        task.title().to_owned(),
        task.category().as_str().to_owned(),
        task.priority().as_str().to_owned(),
        task.stage().as_str().to_owned(),
        task.due().map(format_date).unwrap_or_default(),
        task.notes().to_owned(),
        format_timestamp(task.created_at(), offset),
        task.completed_at()
            .map(|timestamp| format_timestamp(timestamp, offset))
            .unwrap_or_default(),
    ]
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_DISPLAY_FORMAT).to_string()
}

fn format_timestamp(timestamp: DateTime<Utc>, offset: FixedOffset) -> String {
    timestamp
        .with_timezone(&offset)
        .format(TIMESTAMP_DISPLAY_FORMAT)
        .to_string()
}
