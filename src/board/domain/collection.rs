//! Insertion-ordered task collection with derived board views.

use super::{Stage, Task, TaskDomainError, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Immutable snapshot of every task on the board.
///
/// Operations that change the board return a new collection; a snapshot held
/// by a reader never changes underneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Task>", into = "Vec<Task>")]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Builds a collection from tasks in board order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DuplicateTask`] when two tasks share an
    /// identifier.
    pub fn from_tasks(tasks: Vec<Task>) -> Result<Self, TaskDomainError> {
        let mut seen = HashSet::with_capacity(tasks.len());
        for task in &tasks {
            if !seen.insert(task.id()) {
                return Err(TaskDomainError::DuplicateTask(task.id()));
            }
        }
        Ok(Self { tasks })
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the board holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates over tasks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Returns the tasks as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns a collection with `task` appended.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DuplicateTask`] when the identifier is
    /// already present.
    pub fn with_appended(&self, task: Task) -> Result<Self, TaskDomainError> {
        if self.find(task.id()).is_some() {
            return Err(TaskDomainError::DuplicateTask(task.id()));
        }
        let mut tasks = self.tasks.clone();
        tasks.push(task);
        Ok(Self { tasks })
    }

    /// Returns a collection in which the task sharing `task`'s identifier is
    /// replaced at its current position, or `None` when no such task exists.
    #[must_use]
    pub fn with_replaced(&self, task: Task) -> Option<Self> {
        let position = self.tasks.iter().position(|current| current.id() == task.id())?;
        let tasks = self
            .tasks
            .iter()
            .enumerate()
            .map(|(index, current)| {
                if index == position {
                    task.clone()
                } else {
                    current.clone()
                }
            })
            .collect();
        Some(Self { tasks })
    }

    /// Returns a collection without the task `id`, or `None` when no such
    /// task exists.
    #[must_use]
    pub fn without(&self, id: TaskId) -> Option<Self> {
        self.find(id)?;
        let tasks = self
            .tasks
            .iter()
            .filter(|task| task.id() != id)
            .cloned()
            .collect();
        Some(Self { tasks })
    }

    /// Returns tasks whose title or category label contains `query`,
    /// ignoring case. An empty query matches every task.
    #[must_use]
    pub fn filtered_by(&self, query: &str) -> Vec<&Task> {
        let needle = query.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| {
                task.title().to_lowercase().contains(&needle)
                    || task.category().as_str().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Iterates over the tasks in `stage`, in insertion order.
    pub fn in_stage(&self, stage: Stage) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| task.stage() == stage)
    }

    /// Counts the tasks in `stage`.
    #[must_use]
    pub fn count_by_stage(&self, stage: Stage) -> usize {
        self.in_stage(stage).count()
    }

    /// Returns the task count of every stage in board order.
    #[must_use]
    pub fn stage_counts(&self) -> [(Stage, usize); 4] {
        Stage::ALL.map(|stage| (stage, self.count_by_stage(stage)))
    }

    /// Returns the share of completed tasks as a whole percentage, rounding
    /// halves up. An empty board is 0% complete.
    #[must_use]
    pub fn completion_percentage(&self) -> u8 {
        let total = self.tasks.len();
        let completed = self.count_by_stage(Stage::Completed);
        // round(100 * c / t) == floor((200 * c + t) / (2 * t))
        let numerator = completed.saturating_mul(200).saturating_add(total);
        numerator
            .checked_div(total.saturating_mul(2))
            .and_then(|percent| u8::try_from(percent).ok())
            .unwrap_or(0)
    }
}

impl TryFrom<Vec<Task>> for TaskCollection {
    type Error = TaskDomainError;

    fn try_from(tasks: Vec<Task>) -> Result<Self, Self::Error> {
        Self::from_tasks(tasks)
    }
}

impl From<TaskCollection> for Vec<Task> {
    fn from(collection: TaskCollection) -> Self {
        collection.tasks
    }
}

impl<'a> IntoIterator for &'a TaskCollection {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
