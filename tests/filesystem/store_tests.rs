//! Directory-backed key-value store tests.

use super::helpers::ScratchDir;
use eyre::WrapErr;
use rstest::rstest;
use secboard::board::{
    adapters::fs::DirKeyValueStore,
    ports::{KeyValueStore, StoreError},
};

#[rstest]
fn missing_key_reads_as_absent() -> eyre::Result<()> {
    let scratch = ScratchDir::new("store_missing")?;
    let store = DirKeyValueStore::open(scratch.path()).wrap_err("open store")?;

    eyre::ensure!(store.get("secboard.tasks.v1")?.is_none());
    Ok(())
}

#[rstest]
fn written_value_is_read_back_and_overwritten() -> eyre::Result<()> {
    let scratch = ScratchDir::new("store_round_trip")?;
    let store = DirKeyValueStore::open(scratch.path()).wrap_err("open store")?;

    store.set("secboard.tasks.v1", "[]")?;
    store.set("secboard.tasks.v1", r#"[{"title":"x"}]"#)?;

    eyre::ensure!(store.get("secboard.tasks.v1")?.as_deref() == Some(r#"[{"title":"x"}]"#));
    Ok(())
}

#[rstest]
fn values_land_in_json_files_without_partials() -> eyre::Result<()> {
    let scratch = ScratchDir::new("store_files")?;
    let store = DirKeyValueStore::open(scratch.path()).wrap_err("open store")?;
    store.set("board", "[]")?;

    let dir = scratch.open()?;
    let mut names = Vec::new();
    for entry in dir.entries().wrap_err("list store directory")? {
        names.push(entry?.file_name()?);
    }

    eyre::ensure!(names == vec!["board.json".to_owned()], "unexpected files: {names:?}");
    Ok(())
}

#[rstest]
fn open_creates_nested_directories() -> eyre::Result<()> {
    let scratch = ScratchDir::new("store_nested")?;
    let nested = scratch.path().join("data").join("boards");
    let store = DirKeyValueStore::open(&nested).wrap_err("open nested store")?;
    store.set("board", "[]")?;

    let reopened = DirKeyValueStore::open(&nested).wrap_err("reopen nested store")?;
    eyre::ensure!(reopened.get("board")?.as_deref() == Some("[]"));
    Ok(())
}

#[rstest]
#[case("")]
#[case(".hidden")]
#[case("../escape")]
#[case("nested/key")]
fn unsafe_keys_are_rejected(#[case] key: &str) -> eyre::Result<()> {
    let scratch = ScratchDir::new("store_keys")?;
    let store = DirKeyValueStore::open(scratch.path()).wrap_err("open store")?;

    let result = store.set(key, "[]");

    eyre::ensure!(
        matches!(result, Err(StoreError::Unavailable(_))),
        "key {key:?} should be rejected, got {result:?}"
    );
    Ok(())
}
