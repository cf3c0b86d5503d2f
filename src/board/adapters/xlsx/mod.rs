//! Spreadsheet report output.

mod writer;

pub use writer::{XlsxReportWriter, render_workbook};
