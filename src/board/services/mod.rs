//! Application services for the task board.

mod board;
mod export;
mod persistence;

pub use board::{BoardError, BoardResult, MutationOutcome, TaskBoard};
pub use export::{ExportError, ExportedReport, export_report};
pub use persistence::{
    DEFAULT_STORAGE_KEY, PersistenceError, PersistenceResult, TaskPersistence,
};
