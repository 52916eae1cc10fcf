//! Data model for the inbound migration analysis.
//!
//! Raw survey rows ([`MigrationRecord`]) and the reference list of US
//! states/territories ([`ReferenceStateList`]) come out of ingestion; every
//! other type here is derived by the analysis and written out as a report row.

pub mod percent;
pub mod record;
pub mod report;
pub mod summary;

pub use percent::{percent_of, round2};
pub use record::{MigrationRecord, ReferenceStateList};
pub use report::{ReportRow, serialize_pct};
pub use summary::{
    CountyDetailRow, CountySummary, CrossTabRow, OriginAggregate, RankedCounty, TOTAL_LABEL,
};
