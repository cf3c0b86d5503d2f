//! Port contracts for board persistence and report output.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod report;
pub mod storage;

pub use report::{ReportWriteError, ReportWriter};
pub use storage::{KeyValueStore, StoreError, StoreResult};
