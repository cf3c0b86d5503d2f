//! Spreadsheet writer tests.

use super::helpers::ScratchDir;
use chrono::{FixedOffset, NaiveDate};
use eyre::WrapErr;
use rstest::rstest;
use secboard::board::{
    adapters::xlsx::XlsxReportWriter,
    domain::{ExportScope, Stage, Task, TaskDraft, TaskReport},
    ports::ReportWriter,
};

fn sample_report() -> eyre::Result<TaskReport> {
    let clock = mockable::DefaultClock;
    let draft = TaskDraft::new("Acme external pen test")
        .with_stage(Stage::InProgress)
        .with_due(NaiveDate::from_ymd_opt(2026, 3, 14))
        .with_notes("Scope: 10.0.0.0/24");
    let task = Task::create(&draft, &clock).wrap_err("create sample task")?;
    let offset = FixedOffset::east_opt(0).ok_or_else(|| eyre::eyre!("invalid offset"))?;
    Ok(TaskReport::project(&[task], ExportScope::All, offset))
}

#[rstest]
fn writes_workbook_into_export_directory() -> eyre::Result<()> {
    let scratch = ScratchDir::new("xlsx_write")?;
    let writer = XlsxReportWriter::open(scratch.path()).wrap_err("open writer")?;

    let path = writer.write(&sample_report()?, "cybersec-tasks-2026-03-01.xlsx")?;

    eyre::ensure!(path == scratch.path().join("cybersec-tasks-2026-03-01.xlsx"));
    let bytes = scratch
        .open()?
        .read("cybersec-tasks-2026-03-01.xlsx")
        .wrap_err("read written workbook")?;
    eyre::ensure!(bytes.starts_with(b"PK"), "workbook should be a zip archive");
    Ok(())
}

#[rstest]
fn leaves_no_partial_file_behind() -> eyre::Result<()> {
    let scratch = ScratchDir::new("xlsx_partial")?;
    let writer = XlsxReportWriter::open(scratch.path()).wrap_err("open writer")?;
    writer.write(&sample_report()?, "report.xlsx")?;

    let dir = scratch.open()?;
    let mut names = Vec::new();
    for entry in dir.entries().wrap_err("list export directory")? {
        names.push(entry?.file_name()?);
    }

    eyre::ensure!(names == vec!["report.xlsx".to_owned()], "unexpected files: {names:?}");
    Ok(())
}

#[rstest]
fn location_reports_the_export_directory() -> eyre::Result<()> {
    let scratch = ScratchDir::new("xlsx_location")?;
    let writer = XlsxReportWriter::open(scratch.path()).wrap_err("open writer")?;

    eyre::ensure!(writer.location() == scratch.path());
    Ok(())
}
