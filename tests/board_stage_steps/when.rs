//! When steps for board stage BDD scenarios.

use super::world::BoardStageWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use secboard::board::domain::{Direction, Stage, TaskDraft};

fn move_repeatedly(
    world: &mut BoardStageWorld,
    direction: Direction,
    times: u32,
) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    for _ in 0..times {
        world.last_outcome = Some(world.board.move_stage(id, direction));
    }
    Ok(())
}

#[when("the task is moved forward {times:u32} times")]
fn task_moved_forward(world: &mut BoardStageWorld, times: u32) -> Result<(), eyre::Report> {
    move_repeatedly(world, Direction::Forward, times)
}

#[when("the task is moved back {times:u32} times")]
fn task_moved_back(world: &mut BoardStageWorld, times: u32) -> Result<(), eyre::Report> {
    move_repeatedly(world, Direction::Back, times)
}

#[when(r#"the task is edited into "{stage}""#)]
fn task_edited_into(world: &mut BoardStageWorld, stage: String) -> Result<(), eyre::Report> {
    let target = Stage::try_from(stage.as_str())
        .map_err(|err| eyre::eyre!("invalid stage in scenario: {err}"))?;
    let id = world.task_id()?;
    let task = world
        .board
        .find(id)
        .ok_or_else(|| eyre::eyre!("scenario task is missing from the board"))?;
    let draft = TaskDraft::from_task(task).with_stage(target);
    let outcome = world
        .board
        .update(id, &draft)
        .wrap_err("edit task stage in scenario")?;
    world.last_outcome = Some(outcome);
    Ok(())
}
