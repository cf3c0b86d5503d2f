//! Configuration wiring tests.

use super::helpers::ScratchDir;
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest::rstest;
use secboard::board::domain::{ExportScope, Stage, TaskDraft};
use secboard::board::services::DEFAULT_STORAGE_KEY;
use secboard::config::{BoardConfig, ConfigError};
use std::sync::Arc;

fn config_in(scratch: &ScratchDir) -> BoardConfig {
    BoardConfig {
        data_dir: scratch.path().join("data"),
        export_dir: scratch.path().join("reports"),
        ..BoardConfig::default()
    }
}

#[rstest]
fn missing_config_file_yields_defaults() -> eyre::Result<()> {
    let scratch = ScratchDir::new("config_missing")?;

    let config = BoardConfig::load(&scratch.open()?, "secboard.json")?;

    eyre::ensure!(config == BoardConfig::default());
    Ok(())
}

#[rstest]
fn config_file_is_read_from_directory() -> eyre::Result<()> {
    let scratch = ScratchDir::new("config_file")?;
    let dir = scratch.open()?;
    dir.write(
        "secboard.json",
        r#"{"storageKey":"team.board","logLevel":"debug"}"#,
    )
    .wrap_err("write config file")?;

    let config = BoardConfig::load(&dir, "secboard.json")?;

    eyre::ensure!(config.storage_key == "team.board");
    eyre::ensure!(config.log_level == "debug");
    Ok(())
}

#[rstest]
fn invalid_config_file_is_rejected() -> eyre::Result<()> {
    let scratch = ScratchDir::new("config_invalid")?;
    let dir = scratch.open()?;
    dir.write("secboard.json", r#"{"storageKey":"  "}"#)
        .wrap_err("write config file")?;

    let result = BoardConfig::load(&dir, "secboard.json");

    eyre::ensure!(matches!(result, Err(ConfigError::EmptyStorageKey)));
    Ok(())
}

#[rstest]
fn board_survives_reopening_from_disk() -> eyre::Result<()> {
    let scratch = ScratchDir::new("config_reopen")?;
    let config = config_in(&scratch);

    let mut board = config.open_board(Arc::new(DefaultClock))?;
    let id = board.create(&TaskDraft::new("Firmware review").with_stage(Stage::Review))?;
    drop(board);

    let reopened = config.open_board(Arc::new(DefaultClock))?;
    let task = reopened
        .find(id)
        .ok_or_else(|| eyre::eyre!("task should be reloaded"))?;
    eyre::ensure!(task.title() == "Firmware review");
    eyre::ensure!(task.stage() == Stage::Review);
    eyre::ensure!(reopened.persistence_warning().is_none());

    let stored = scratch
        .open()?
        .read_to_string(format!("data/{DEFAULT_STORAGE_KEY}.json"))
        .wrap_err("read stored collection")?;
    eyre::ensure!(stored.contains("\"stage\":\"Review/QA\""));
    Ok(())
}

#[rstest]
fn export_writes_into_configured_directory() -> eyre::Result<()> {
    let scratch = ScratchDir::new("config_export")?;
    let config = config_in(&scratch);
    let mut board = config.open_board(Arc::new(DefaultClock))?;
    board.create(&TaskDraft::new("Close incident INC-42").with_stage(Stage::Completed))?;
    board.create(&TaskDraft::new("Quarterly access review"))?;

    let writer = config.report_writer()?;
    let exported = board.export_report(ExportScope::All, &writer)?;

    eyre::ensure!(exported.row_count == 2);
    eyre::ensure!(exported.path.starts_with(scratch.path().join("reports")));
    let file_name = exported
        .path
        .file_name()
        .ok_or_else(|| eyre::eyre!("exported path has no file name"))?;
    eyre::ensure!(file_name.starts_with("cybersec-tasks-"));
    eyre::ensure!(file_name.ends_with(".xlsx"));
    Ok(())
}

#[rstest]
fn unusable_storage_key_fails_before_opening_the_board() -> eyre::Result<()> {
    let scratch = ScratchDir::new("config_bad_key")?;
    let config = BoardConfig {
        storage_key: "team board".to_owned(),
        ..config_in(&scratch)
    };

    let result = config.open_board(Arc::new(DefaultClock));

    eyre::ensure!(
        matches!(&result, Err(ConfigError::InvalidStorageKey(key)) if key == "team board"),
        "open_board should reject the key"
    );
    eyre::ensure!(
        !scratch.path().join("data").exists(),
        "data directory should not be created for a rejected key"
    );
    Ok(())
}
