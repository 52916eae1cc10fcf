//! Error types for report output and verification.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A filesystem operation failed.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be encoded.
    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for report output.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Structural failures of a verification pass.
///
/// Individual unparsable rows are not errors; they are counted as skipped.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    #[error("CSV does not contain header '{column}'. Available headers: {available:?}")]
    MissingColumn {
        column: String,
        path: PathBuf,
        available: Vec<String>,
    },

    #[error("failed to read CSV {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("sum of '{column}' in {path} overflows at row {row}")]
    Overflow {
        path: PathBuf,
        column: String,
        row: usize,
    },
}

impl VerifyError {
    /// Process exit code reported for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => 2,
            Self::MissingColumn { .. } => 3,
            Self::Read { .. } | Self::Overflow { .. } => 1,
        }
    }
}
