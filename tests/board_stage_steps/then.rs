//! Then steps for board stage BDD scenarios.

use super::world::BoardStageWorld;
use rstest_bdd_macros::then;
use secboard::board::{
    domain::{Stage, Task},
    services::MutationOutcome,
};

fn scenario_task(world: &BoardStageWorld) -> Result<&Task, eyre::Report> {
    let id = world.task_id()?;
    world
        .board
        .find(id)
        .ok_or_else(|| eyre::eyre!("scenario task is missing from the board"))
}

#[then(r#"the task stage is "{stage}""#)]
fn task_stage_is(world: &BoardStageWorld, stage: String) -> Result<(), eyre::Report> {
    let expected = Stage::try_from(stage.as_str())
        .map_err(|err| eyre::eyre!("invalid expected stage in scenario: {err}"))?;
    let task = scenario_task(world)?;

    if task.stage() != expected {
        return Err(eyre::eyre!(
            "expected stage {}, found {}",
            expected.as_str(),
            task.stage().as_str()
        ));
    }
    Ok(())
}

#[then("the task has a completion timestamp")]
fn task_has_completion_timestamp(world: &BoardStageWorld) -> Result<(), eyre::Report> {
    if scenario_task(world)?.completed_at().is_none() {
        return Err(eyre::eyre!("expected a completion timestamp"));
    }
    Ok(())
}

#[then("the task has no completion timestamp")]
fn task_has_no_completion_timestamp(world: &BoardStageWorld) -> Result<(), eyre::Report> {
    if let Some(completed_at) = scenario_task(world)?.completed_at() {
        return Err(eyre::eyre!(
            "expected no completion timestamp, found {completed_at}"
        ));
    }
    Ok(())
}

#[then("the last move left the board unchanged")]
fn last_move_unchanged(world: &BoardStageWorld) -> Result<(), eyre::Report> {
    match world.last_outcome {
        Some(MutationOutcome::Unchanged) => Ok(()),
        other => Err(eyre::eyre!("expected an unchanged outcome, got {other:?}")),
    }
}
