//! Shared world state for board stage BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use secboard::board::{
    adapters::memory::InMemoryKeyValueStore,
    domain::TaskId,
    services::{MutationOutcome, TaskBoard, TaskPersistence},
};

/// Board type used by the BDD world.
pub type TestBoard = TaskBoard<InMemoryKeyValueStore, DefaultClock>;

/// Scenario world for board stage behaviour tests.
pub struct BoardStageWorld {
    pub board: TestBoard,
    pub task_id: Option<TaskId>,
    pub last_outcome: Option<MutationOutcome>,
}

impl BoardStageWorld {
    /// Creates a world around an empty in-memory board.
    #[must_use]
    pub fn new() -> Self {
        let board = TaskBoard::open(
            TaskPersistence::new(Arc::new(InMemoryKeyValueStore::new())),
            Arc::new(DefaultClock),
        );

        Self {
            board,
            task_id: None,
            last_outcome: None,
        }
    }

    /// Returns the scenario's task identifier.
    pub fn task_id(&self) -> Result<TaskId, eyre::Report> {
        self.task_id
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for BoardStageWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardStageWorld {
    BoardStageWorld::default()
}
