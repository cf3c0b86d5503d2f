//! Given steps for board stage BDD scenarios.

use super::world::BoardStageWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use secboard::board::domain::{Stage, TaskDraft};

#[given(r#"a board with a task titled "{title}""#)]
fn board_with_task(world: &mut BoardStageWorld, title: String) -> Result<(), eyre::Report> {
    let id = world
        .board
        .create(&TaskDraft::new(title))
        .wrap_err("create task for stage scenario")?;
    world.task_id = Some(id);
    Ok(())
}

#[given(r#"the task has been dropped on "{stage}""#)]
fn task_dropped_on(world: &mut BoardStageWorld, stage: String) -> Result<(), eyre::Report> {
    let target = Stage::try_from(stage.as_str())
        .map_err(|err| eyre::eyre!("invalid stage in scenario: {err}"))?;
    let id = world.task_id()?;
    world.last_outcome = Some(world.board.set_stage(id, target));
    Ok(())
}
