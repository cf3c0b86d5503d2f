//! The task board service: owner of the task collection.

use crate::board::{
    domain::{
        Direction, DueStatus, ExportScope, Stage, Task, TaskCollection, TaskDomainError,
        TaskDraft, TaskId, ValidationErrors, today,
    },
    ports::{KeyValueStore, ReportWriter},
};
use chrono::NaiveDate;
use log::{debug, info, warn};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

use super::{
    export::{ExportError, ExportedReport, export_report},
    persistence::{PersistenceError, TaskPersistence},
};

/// Errors that block a board mutation. The board is unchanged when one is
/// returned.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The submitted draft failed field validation.
    #[error("invalid task: {0}")]
    Validation(#[from] ValidationErrors),

    /// A domain rule rejected the change.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
}

/// Result type for board mutations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Whether a mutation changed the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationOutcome {
    /// A new collection replaced the old one and was saved.
    Applied,
    /// The request was a no-op; nothing was saved.
    Unchanged,
}

/// Single-writer task board.
///
/// The board hydrates its collection once when opened and saves the whole
/// collection after every applied mutation. A failed load or save is never
/// fatal: the board keeps working from memory and reports the failure
/// through [`TaskBoard::persistence_warning`].
pub struct TaskBoard<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    persistence: TaskPersistence<S>,
    clock: Arc<C>,
    tasks: TaskCollection,
    persistence_warning: Option<PersistenceError>,
}

impl<S, C> TaskBoard<S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Opens a board, hydrating it from `persistence`.
    ///
    /// When the stored state cannot be read or decoded the board starts
    /// empty and the load error becomes the persistence warning.
    #[must_use]
    pub fn open(persistence: TaskPersistence<S>, clock: Arc<C>) -> Self {
        let (tasks, persistence_warning) = match persistence.load() {
            Ok(tasks) => {
                info!(
                    "event=board_load status=ok key={} tasks={}",
                    persistence.key(),
                    tasks.len()
                );
                (tasks, None)
            }
            Err(err) => {
                warn!(
                    "event=board_load status=recovered key={} error={err}",
                    persistence.key()
                );
                (TaskCollection::new(), Some(err))
            }
        };
        Self {
            persistence,
            clock,
            tasks,
            persistence_warning,
        }
    }

    /// Returns the current collection.
    #[must_use]
    pub const fn tasks(&self) -> &TaskCollection {
        &self.tasks
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.find(id)
    }

    /// Returns tasks whose title or category contains `query`, ignoring case.
    #[must_use]
    pub fn filtered_by(&self, query: &str) -> Vec<&Task> {
        self.tasks.filtered_by(query)
    }

    /// Returns the tasks in `stage`, in insertion order.
    #[must_use]
    pub fn tasks_in_stage(&self, stage: Stage) -> Vec<&Task> {
        self.tasks.in_stage(stage).collect()
    }

    /// Counts the tasks in `stage`.
    #[must_use]
    pub fn count_by_stage(&self, stage: Stage) -> usize {
        self.tasks.count_by_stage(stage)
    }

    /// Returns every stage's task count in board order.
    #[must_use]
    pub fn stage_counts(&self) -> [(Stage, usize); 4] {
        self.tasks.stage_counts()
    }

    /// Returns the completed share of tasks as a rounded percentage.
    #[must_use]
    pub fn completion_percentage(&self) -> u8 {
        self.tasks.completion_percentage()
    }

    /// Returns the local calendar date according to the board's clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        today(&*self.clock)
    }

    /// Returns the due-date badge values for task `id`.
    #[must_use]
    pub fn due_status(&self, id: TaskId) -> Option<DueStatus> {
        let today = self.today();
        self.find(id).map(|task| DueStatus::evaluate(task, today))
    }

    /// Returns the most recent unresolved load or save failure.
    #[must_use]
    pub const fn persistence_warning(&self) -> Option<&PersistenceError> {
        self.persistence_warning.as_ref()
    }

    /// Creates a task from `draft` and appends it to the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when the draft is invalid.
    pub fn create(&mut self, draft: &TaskDraft) -> BoardResult<TaskId> {
        let task = Task::create(draft, &*self.clock)?;
        let id = task.id();
        let next = self.tasks.with_appended(task)?;
        self.commit(next, "create", id);
        Ok(id)
    }

    /// Replaces task `id`'s editable fields from `draft`.
    ///
    /// A stage change made here does not stamp or clear the completion
    /// timestamp; use [`TaskBoard::move_stage`] or [`TaskBoard::set_stage`]
    /// for that.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when the draft is invalid.
    pub fn update(&mut self, id: TaskId, draft: &TaskDraft) -> BoardResult<MutationOutcome> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(errors.into());
        }
        let Some(current) = self.tasks.find(id) else {
            return Ok(self.unchanged("update", id));
        };
        let edited = current.edited(draft)?;
        Ok(self.replace(edited, "update"))
    }

    /// Moves task `id` one stage in `direction`.
    ///
    /// Moving past either end of the board, or naming an unknown task, is a
    /// no-op.
    pub fn move_stage(&mut self, id: TaskId, direction: Direction) -> MutationOutcome {
        let moved = self
            .tasks
            .find(id)
            .and_then(|task| task.moved(direction, &*self.clock));
        match moved {
            Some(task) => self.replace(task, "move_stage"),
            None => self.unchanged("move_stage", id),
        }
    }

    /// Places task `id` directly in `stage`, as a drop onto a column does.
    ///
    /// Assigning the current stage, or naming an unknown task, is a no-op.
    pub fn set_stage(&mut self, id: TaskId, stage: Stage) -> MutationOutcome {
        let restaged = self
            .tasks
            .find(id)
            .and_then(|task| task.restaged(stage, &*self.clock));
        match restaged {
            Some(task) => self.replace(task, "set_stage"),
            None => self.unchanged("set_stage", id),
        }
    }

    /// Replaces task `id`'s notes.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`] wrapping
    /// [`TaskDomainError::NotesTooLong`] when `notes` exceeds the maximum.
    pub fn set_notes(&mut self, id: TaskId, notes: &str) -> BoardResult<MutationOutcome> {
        let Some(current) = self.tasks.find(id) else {
            return Ok(self.unchanged("set_notes", id));
        };
        let annotated = current.annotated(notes)?;
        Ok(self.replace(annotated, "set_notes"))
    }

    /// Removes task `id` permanently. Unknown identifiers are a no-op.
    pub fn delete(&mut self, id: TaskId) -> MutationOutcome {
        match self.tasks.without(id) {
            Some(next) => {
                self.commit(next, "delete", id);
                MutationOutcome::Applied
            }
            None => self.unchanged("delete", id),
        }
    }

    /// Exports the board as a spreadsheet through `writer`. The board is not
    /// modified.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Empty`] when `scope` selects no task, or
    /// [`ExportError::Write`] when the writer fails.
    pub fn export_report(
        &self,
        scope: ExportScope,
        writer: &impl ReportWriter,
    ) -> Result<ExportedReport, ExportError> {
        export_report(&self.tasks, scope, &*self.clock, writer)
    }

    fn replace(&mut self, task: Task, operation: &str) -> MutationOutcome {
        let id = task.id();
        match self.tasks.with_replaced(task) {
            Some(next) => {
                self.commit(next, operation, id);
                MutationOutcome::Applied
            }
            None => self.unchanged(operation, id),
        }
    }

    fn unchanged(&self, operation: &str, id: TaskId) -> MutationOutcome {
        debug!(
            "event=task_mutation op={operation} task_id={id} status=unchanged tasks={}",
            self.tasks.len()
        );
        MutationOutcome::Unchanged
    }

    fn commit(&mut self, next: TaskCollection, operation: &str, id: TaskId) {
        self.tasks = next;
        info!(
            "event=task_mutation op={operation} task_id={id} status=applied tasks={}",
            self.tasks.len()
        );
        match self.persistence.save(&self.tasks) {
            Ok(()) => self.persistence_warning = None,
            Err(err) => {
                warn!(
                    "event=board_save status=memory_only key={} error={err}",
                    self.persistence.key()
                );
                self.persistence_warning = Some(err);
            }
        }
    }
}
