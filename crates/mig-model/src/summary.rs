//! Derived aggregates and the report rows built from them.

use serde::Serialize;

use crate::report::{ReportRow, serialize_pct};

/// Origin label used by the per-county grand total report.
pub const TOTAL_LABEL: &str = "Total";

/// Inbound count summed across all counties for one origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginAggregate {
    pub origin_state: String,
    pub inbound_from_state: u64,
}

impl ReportRow for OriginAggregate {
    const HEADERS: &'static [&'static str] = &["originState", "inboundFromState"];
}

/// Internal vs external breakdown of one county's inbound migration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountySummary {
    pub county: String,
    pub total_migration: u64,
    pub total_internal_migration: u64,
    pub total_external_migration: u64,
    #[serde(serialize_with = "serialize_pct")]
    pub pct_internal: f64,
    #[serde(serialize_with = "serialize_pct")]
    pub pct_external: f64,
}

impl ReportRow for CountySummary {
    const HEADERS: &'static [&'static str] = &[
        "county",
        "totalMigration",
        "totalInternalMigration",
        "totalExternalMigration",
        "pctInternal",
        "pctExternal",
    ];
}

/// A county summary with its 1-based position in the descending ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCounty {
    pub rank: usize,
    pub summary: CountySummary,
}

impl RankedCounty {
    pub fn county(&self) -> &str {
        &self.summary.county
    }

    pub fn total(&self) -> u64 {
        self.summary.total_migration
    }
}

/// One origin's contribution to a single county.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyDetailRow {
    pub origin_state: String,
    pub inbound_from_state: u64,
    /// Share of the county's own total.
    #[serde(serialize_with = "serialize_pct")]
    pub pct_of_total: f64,
}

impl ReportRow for CountyDetailRow {
    const HEADERS: &'static [&'static str] = &["originState", "inboundFromState", "pctOfTotal"];
}

/// Flattened county x origin row shared by the cross tab reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossTabRow {
    pub county: String,
    /// Origin label, or [`TOTAL_LABEL`] for county grand totals.
    pub origin_state: String,
    pub inbound_from_state: u64,
    #[serde(serialize_with = "serialize_pct")]
    pub pct_of_total: f64,
}

impl ReportRow for CrossTabRow {
    const HEADERS: &'static [&'static str] =
        &["county", "originState", "inboundFromState", "pctOfTotal"];
}
