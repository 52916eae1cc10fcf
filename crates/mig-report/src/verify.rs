//! Independent re-summing of a numeric column in a written report.

use std::path::{Path, PathBuf};

use mig_ingest::{INBOUND_COLUMN, coerce_integer};

use crate::error::VerifyError;

/// Column summed when none is given.
pub const DEFAULT_VERIFY_COLUMN: &str = INBOUND_COLUMN;

/// Outcome of a verification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTotal {
    pub path: PathBuf,
    pub column: String,
    /// Data rows read.
    pub rows: usize,
    /// Rows whose value was neither an integer nor a float.
    pub skipped: usize,
    pub total: i128,
}

/// Re-reads `path` and sums `column`.
///
/// Each value is read as an integer, then as a float truncated toward zero;
/// rows where both fail are counted as skipped and contribute nothing. A sum
/// that leaves the `i128` range is a [`VerifyError::Overflow`].
pub fn sum_column(path: &Path, column: &str) -> Result<ColumnTotal, VerifyError> {
    if !path.is_file() {
        return Err(VerifyError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let read_error = |source: csv::Error| VerifyError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(read_error)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(read_error)?
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}').to_string())
        .collect();
    let Some(index) = headers.iter().position(|header| header == column) else {
        return Err(VerifyError::MissingColumn {
            column: column.to_string(),
            path: path.to_path_buf(),
            available: headers,
        });
    };

    let mut rows = 0usize;
    let mut skipped = 0usize;
    let mut total = 0i128;
    for record in reader.records() {
        let record = record.map_err(read_error)?;
        rows += 1;
        match coerce_integer(record.get(index).unwrap_or("")) {
            Ok(value) => {
                total = total.checked_add(value).ok_or_else(|| VerifyError::Overflow {
                    path: path.to_path_buf(),
                    column: column.to_string(),
                    row: rows,
                })?;
            }
            Err(error) => {
                tracing::debug!(row = rows, %error, "row skipped");
                skipped += 1;
            }
        }
    }

    tracing::info!(
        path = %path.display(),
        column,
        rows,
        skipped,
        total,
        "column re-summed"
    );
    Ok(ColumnTotal {
        path: path.to_path_buf(),
        column: column.to_string(),
        rows,
        skipped,
        total,
    })
}
