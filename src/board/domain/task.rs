//! Task aggregate root.

use super::{
    Category, Direction, NOTES_MAX_CHARS, Priority, Stage, TaskDomainError, TaskDraft, TaskId,
    ValidationErrors, parse_local_date,
};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize};

/// A single card on the board.
///
/// Tasks are values: every operation that changes a task returns a new
/// [`Task`] and leaves the receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    priority: Priority,
    category: Category,
    stage: Stage,
    #[serde(default, deserialize_with = "legacy::optional_date")]
    due: Option<NaiveDate>,
    #[serde(default)]
    notes: String,
    created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "legacy::optional_timestamp")]
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Stored task identifier.
    pub id: TaskId,
    /// Stored title.
    pub title: String,
    /// Stored priority.
    pub priority: Priority,
    /// Stored category.
    pub category: Category,
    /// Stored stage.
    pub stage: Stage,
    /// Stored due date, if any.
    pub due: Option<NaiveDate>,
    /// Stored notes.
    pub notes: String,
    /// Stored creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Stored completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new task from a draft.
    ///
    /// # Errors
    ///
    /// Returns the draft's [`ValidationErrors`] when any field rule fails.
    pub fn create(draft: &TaskDraft, clock: &impl Clock) -> Result<Self, ValidationErrors> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self {
            id: TaskId::new(),
            title: draft.title().to_owned(),
            priority: draft.priority(),
            category: draft.category(),
            stage: draft.stage(),
            due: draft.due(),
            notes: draft.notes().to_owned(),
            created_at: clock.utc(),
            completed_at: None,
        })
    }

    /// Reconstructs a task from stored data.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            priority: data.priority,
            category: data.category,
            stage: data.stage,
            due: data.due,
            notes: data.notes,
            created_at: data.created_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due(&self) -> Option<NaiveDate> {
        self.due
    }

    /// Returns the notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns a copy with every editable field replaced from `draft`.
    ///
    /// The identifier, creation timestamp and completion timestamp are kept
    /// as they are, even when the draft moves the task to another stage.
    /// Only [`Task::moved`] and [`Task::restaged`] maintain `completed_at`.
    ///
    /// # Errors
    ///
    /// Returns the draft's [`ValidationErrors`] when any field rule fails.
    pub fn edited(&self, draft: &TaskDraft) -> Result<Self, ValidationErrors> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self {
            title: draft.title().to_owned(),
            priority: draft.priority(),
            category: draft.category(),
            stage: draft.stage(),
            due: draft.due(),
            notes: draft.notes().to_owned(),
            ..self.clone()
        })
    }

    /// Returns a copy moved one stage in `direction`, or `None` when the task
    /// already sits at that end of the board.
    #[must_use]
    pub fn moved(&self, direction: Direction, clock: &impl Clock) -> Option<Self> {
        let target = self.stage.adjacent(direction)?;
        Some(self.staged_at(target, clock))
    }

    /// Returns a copy placed in `stage`, or `None` when it is already there.
    #[must_use]
    pub fn restaged(&self, stage: Stage, clock: &impl Clock) -> Option<Self> {
        if self.stage == stage {
            return None;
        }
        Some(self.staged_at(stage, clock))
    }

    /// Returns a copy with `notes` replaced.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotesTooLong`] when `notes` exceeds the
    /// maximum length. The text is never truncated.
    pub fn annotated(&self, notes: &str) -> Result<Self, TaskDomainError> {
        let length = notes.chars().count();
        if length > NOTES_MAX_CHARS {
            return Err(TaskDomainError::NotesTooLong {
                length,
                max: NOTES_MAX_CHARS,
            });
        }
        Ok(Self {
            notes: notes.to_owned(),
            ..self.clone()
        })
    }

    fn staged_at(&self, stage: Stage, clock: &impl Clock) -> Self {
        let completed_at = stage.is_completed().then(|| clock.utc());
        Self {
            stage,
            completed_at,
            ..self.clone()
        }
    }
}

/// Readers for payloads that encode "no value" as an empty string.
mod legacy {
    use super::{DateTime, Deserialize, Deserializer, NaiveDate, Utc, parse_local_date};
    use serde::de::Error as _;

    pub(super) fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_local_date))
    }

    pub(super) fn optional_timestamp<'de, D>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => DateTime::parse_from_rfc3339(value)
                .map(|timestamp| Some(timestamp.with_timezone(&Utc)))
                .map_err(D::Error::custom),
        }
    }
}
