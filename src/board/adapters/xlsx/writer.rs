//! `.xlsx` report writer built on `rust_xlsxwriter`.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use rust_xlsxwriter::{Format, Workbook};
use std::io;

use crate::board::{
    domain::TaskReport,
    ports::{ReportWriteError, ReportWriter},
};

/// Writes reports as `.xlsx` workbooks into an export directory.
#[derive(Debug)]
pub struct XlsxReportWriter {
    dir: Dir,
    location: Utf8PathBuf,
}

impl XlsxReportWriter {
    /// Opens the export directory at `path`, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the directory cannot be created or opened.
    pub fn open(path: &Utf8Path) -> io::Result<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self {
            dir,
            location: path.to_owned(),
        })
    }

    /// Returns the export directory path.
    #[must_use]
    pub fn location(&self) -> &Utf8Path {
        &self.location
    }
}

impl ReportWriter for XlsxReportWriter {
    fn write(&self, report: &TaskReport, file_name: &str) -> Result<Utf8PathBuf, ReportWriteError> {
        let bytes = render_workbook(report)?;
        let staging_name = format!(".{file_name}.partial");
        let written = self
            .dir
            .write(&staging_name, &bytes)
            .and_then(|()| self.dir.rename(&staging_name, &self.dir, file_name));
        if let Err(err) = written {
            let _cleanup = self.dir.remove_file(&staging_name);
            return Err(ReportWriteError::Io(err));
        }
        Ok(self.location.join(file_name))
    }
}

/// Renders `report` as an in-memory `.xlsx` document.
///
/// The header row is bold and each column is sized to its widest cell.
///
/// # Errors
///
/// Returns [`ReportWriteError::Render`] when the workbook cannot be built,
/// for example when the report exceeds the worksheet row limit.
pub fn render_workbook(report: &TaskReport) -> Result<Vec<u8>, ReportWriteError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(report.sheet_name())
        .map_err(ReportWriteError::render)?;

    for (index, header) in report.headers().iter().enumerate() {
        worksheet
            .write_string_with_format(0, column(index)?, *header, &header_format)
            .map_err(ReportWriteError::render)?;
    }

    for (row_index, cells) in report.rows().iter().enumerate() {
        let row_number = data_row(row_index)?;
        for (index, cell) in cells.iter().enumerate() {
            worksheet
                .write_string(row_number, column(index)?, cell.as_str())
                .map_err(ReportWriteError::render)?;
        }
    }

    for (index, width) in report.column_widths().into_iter().enumerate() {
        worksheet
            .set_column_width(column(index)?, column_width(width))
            .map_err(ReportWriteError::render)?;
    }

    workbook.save_to_buffer().map_err(ReportWriteError::render)
}

fn column(index: usize) -> Result<u16, ReportWriteError> {
    u16::try_from(index).map_err(ReportWriteError::render)
}

/// Maps a zero-based data row onto the sheet row below the header.
fn data_row(index: usize) -> Result<u32, ReportWriteError> {
    index
        .checked_add(1)
        .and_then(|row| u32::try_from(row).ok())
        .ok_or_else(|| {
            ReportWriteError::render(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("report row {index} exceeds the worksheet limit"),
            ))
        })
}

/// Converts a character width to a column width, capped at the `.xlsx`
/// maximum of 255.
fn column_width(characters: usize) -> f64 {
    f64::from(u8::try_from(characters).unwrap_or(u8::MAX))
}
