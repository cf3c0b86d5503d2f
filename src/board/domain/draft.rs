//! Editable task drafts and the validation rules applied to them.

use super::{Category, Priority, Stage, Task};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum notes length in characters.
pub const NOTES_MAX_CHARS: usize = 2000;

/// Draft field that a validation message is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DraftField {
    /// The task title.
    Title,
    /// The free-text notes.
    Notes,
}

impl DraftField {
    /// Returns the form field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Notes => "notes",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level validation messages. Empty when the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<DraftField, String>);

impl ValidationErrors {
    /// Returns `true` when no rule failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of fields with a message.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the message for `field`, if any.
    #[must_use]
    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Iterates over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Records `message` for `field`, replacing any earlier message.
    fn set(&mut self, field: DraftField, message: &str) {
        self.0.insert(field, message.to_owned());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// User-edited task fields submitted for creation or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    priority: Priority,
    category: Category,
    stage: Stage,
    due: Option<NaiveDate>,
    notes: String,
}

impl TaskDraft {
    /// Creates a draft with the given title and form defaults: medium
    /// priority, the catch-all category, the backlog stage, no due date and
    /// empty notes.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            priority: Priority::Medium,
            category: Category::Other,
            stage: Stage::Backlog,
            due: None,
            notes: String::new(),
        }
    }

    /// Prefills a draft from an existing task for editing.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title().to_owned(),
            priority: task.priority(),
            category: task.category(),
            stage: task.stage(),
            due: task.due(),
            notes: task.notes().to_owned(),
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the category.
    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the stage.
    #[must_use]
    pub const fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub const fn with_due(mut self, due: Option<NaiveDate>) -> Self {
        self.due = due;
        self
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
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

    /// Returns the stage.
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

    /// Checks the draft against the field rules.
    ///
    /// Rules run in order and a later failure on the same field replaces an
    /// earlier message, so a whitespace-only title longer than the maximum
    /// reports the length rule.
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        if self.title.trim().is_empty() {
            errors.set(DraftField::Title, "Title is required.");
        }
        if self.title.chars().count() > TITLE_MAX_CHARS {
            errors.set(DraftField::Title, "Max 100 characters.");
        }
        if self.notes.chars().count() > NOTES_MAX_CHARS {
            errors.set(DraftField::Notes, "Max 2000 characters.");
        }
        errors
    }
}
