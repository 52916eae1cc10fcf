//! Report output for the migration analysis.
//!
//! - **Writer**: header + rows to CSV, written to a temp file and renamed
//! - **Layout**: output directory structure and deterministic file names
//! - **Verify**: re-sums a numeric column of a written report

mod error;
mod layout;
mod output;
mod verify;
mod writer;

pub use error::{ReportError, Result, VerifyError};
pub use layout::{
    COUNTY_SUMMARY_FILE, DEFAULT_OUTPUT_DIR, DETAIL_DIR, OVERALL_FILE, OutputLayout,
    REPORT_EXTENSION,
};
pub use output::{AnalysisOutputs, WrittenCrossTab, WrittenReport, write_analysis};
pub use verify::{ColumnTotal, DEFAULT_VERIFY_COLUMN, sum_column};
pub use writer::write_report;
