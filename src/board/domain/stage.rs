//! Board stages and the adjacency rules between them.

use super::ParseStageError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board column a task sits in.
///
/// Declaration order is board order; it is the only adjacency used when
/// advancing or retreating a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    /// Work not yet started.
    #[serde(rename = "Backlog")]
    Backlog,
    /// Work under way.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Awaiting review or QA sign-off.
    #[serde(rename = "Review/QA")]
    Review,
    /// Work finished.
    #[serde(rename = "Completed")]
    Completed,
}

/// Direction of a sequential stage move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards [`Stage::Completed`].
    Forward,
    /// Towards [`Stage::Backlog`].
    Back,
}

impl Stage {
    /// All stages in board order.
    pub const ALL: [Self; 4] = [Self::Backlog, Self::InProgress, Self::Review, Self::Completed];

    /// Returns the display label, which is also the stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::InProgress => "In Progress",
            Self::Review => "Review/QA",
            Self::Completed => "Completed",
        }
    }

    /// Returns the zero-based board position.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Backlog => 0,
            Self::InProgress => 1,
            Self::Review => 2,
            Self::Completed => 3,
        }
    }

    /// Returns the neighbouring stage in `direction`, or `None` at either end
    /// of the board.
    #[must_use]
    pub fn adjacent(self, direction: Direction) -> Option<Self> {
        let target = match direction {
            Direction::Forward => self.index().checked_add(1)?,
            Direction::Back => self.index().checked_sub(1)?,
        };
        Self::ALL.get(target).copied()
    }

    /// Returns `true` for the terminal stage.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl TryFrom<&str> for Stage {
    type Error = ParseStageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseStageError(value.to_owned()))
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
