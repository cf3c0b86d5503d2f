//! Domain model for the security-operations task board.
//!
//! The domain covers the task aggregate, draft validation, stage adjacency,
//! due-date arithmetic and the report projection. It performs no I/O; time
//! enters only through an injected [`mockable::Clock`].

mod classification;
mod collection;
mod draft;
mod due;
mod error;
mod ids;
mod report;
mod stage;
mod task;

pub use classification::{Category, Priority};
pub use collection::TaskCollection;
pub use draft::{DraftField, NOTES_MAX_CHARS, TITLE_MAX_CHARS, TaskDraft, ValidationErrors};
pub use due::{DATE_FORMAT, DueLabel, DueStatus, days_left, is_overdue, parse_local_date, today};
pub use error::{ParseCategoryError, ParsePriorityError, ParseStageError, TaskDomainError};
pub use ids::TaskId;
pub use report::{
    ExportScope, REPORT_COLUMNS, ReportRow, SHEET_NAME, TaskReport, report_file_name,
};
pub use stage::{Direction, Stage};
pub use task::{PersistedTaskData, Task};
