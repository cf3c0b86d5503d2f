//! Error types for board domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned by task aggregate operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// Notes exceed the stored maximum; the text is rejected, never truncated.
    #[error("notes are {length} characters, the maximum is {max}")]
    NotesTooLong {
        /// Character count of the rejected text.
        length: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// A collection would contain two tasks with the same identifier.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),
}

/// Error returned while parsing a stage label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown stage: {0}")]
pub struct ParseStageError(pub String);

/// Error returned while parsing a priority label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing a category label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);
