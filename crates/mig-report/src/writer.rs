//! CSV report writing.

use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use mig_model::ReportRow;

use crate::error::{ReportError, Result};

/// Writes `rows` to `path` with a header line from [`ReportRow::HEADERS`].
///
/// Missing parent directories are created. Rows go to a sibling temp file
/// that is renamed onto `path` only after it is fully written and synced,
/// so a failed write never leaves a truncated report behind.
///
/// Returns the number of data rows written.
pub fn write_report<R: ReportRow>(path: &Path, rows: &[R]) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ReportError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = temp_path_for(path);
    if let Err(error) = write_rows(&temp_path, rows) {
        let _ = fs::remove_file(&temp_path);
        return Err(error);
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(ReportError::Io {
            operation: "rename",
            path: path.to_path_buf(),
            source: e,
        });
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "report written");
    Ok(rows.len())
}

fn write_rows<R: ReportRow>(temp_path: &Path, rows: &[R]) -> Result<()> {
    let file = File::create(temp_path).map_err(|e| ReportError::Io {
        operation: "create",
        path: temp_path.to_path_buf(),
        source: e,
    })?;
    let csv_error = |source: csv::Error| ReportError::Csv {
        path: temp_path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(R::HEADERS).map_err(csv_error)?;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }

    let file = writer.into_inner().map_err(|e| ReportError::Io {
        operation: "write",
        path: temp_path.to_path_buf(),
        source: e.into_error(),
    })?;
    file.sync_all().map_err(|e| ReportError::Io {
        operation: "sync",
        path: temp_path.to_path_buf(),
        source: e,
    })
}

/// `report.csv` -> `report.csv.tmp`, in the same directory.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("report"));
    name.push(".tmp");
    path.with_file_name(name)
}
