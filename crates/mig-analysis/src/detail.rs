//! Per-county origin breakdowns, one output unit per ranked county.

use std::collections::HashMap;

use mig_model::{CountyDetailRow, MigrationRecord, RankedCounty, percent_of};

use crate::aggregate::{add_count, sum_by_origin};
use crate::error::AnalysisError;
use crate::rank::rank_origins;

/// Ranked origin breakdown for one county.
#[derive(Debug, Clone, PartialEq)]
pub struct CountyDetail {
    /// Global rank of the county, taken from the county ranking.
    pub rank: usize,
    pub county: String,
    /// Sum of the county's inbound counts.
    pub total: u64,
    /// One row per distinct origin, descending by inbound count.
    pub rows: Vec<CountyDetailRow>,
}

impl CountyDetail {
    /// Deterministic unit name, e.g. `3-lewis-and-clark`.
    pub fn unit_name(&self) -> String {
        detail_unit_name(self.rank, &self.county)
    }
}

/// `<rank>-<county>` with the county lowercased and spaces hyphenated.
///
/// Path separators are hyphenated too, so every unit stays a single file
/// name.
pub fn detail_unit_name(rank: usize, county: &str) -> String {
    format!(
        "{rank}-{}",
        county.to_lowercase().replace([' ', '/', '\\'], "-")
    )
}

/// Builds one [`CountyDetail`] per entry of `ranked`, in the same order.
///
/// Shares are measured against each county's own total, not the grand total.
pub fn build_county_details(
    records: &[MigrationRecord],
    ranked: &[RankedCounty],
) -> Result<Vec<CountyDetail>, AnalysisError> {
    let mut by_county: HashMap<&str, Vec<&MigrationRecord>> = HashMap::new();
    for record in records {
        by_county
            .entry(record.county.as_str())
            .or_default()
            .push(record);
    }

    ranked
        .iter()
        .map(|entry| {
            let county_records = by_county
                .get(entry.county())
                .map(Vec::as_slice)
                .unwrap_or_default();
            let total = county_records.iter().try_fold(0u64, |total, record| {
                add_count(total, record.inbound_from_state, entry.county())
            })?;
            let rows = rank_origins(sum_by_origin(county_records.iter().copied())?)
                .into_iter()
                .map(|origin| CountyDetailRow {
                    pct_of_total: percent_of(origin.inbound_from_state, total),
                    origin_state: origin.origin_state,
                    inbound_from_state: origin.inbound_from_state,
                })
                .collect();
            Ok(CountyDetail {
                rank: entry.rank,
                county: entry.county().to_string(),
                total,
                rows,
            })
        })
        .collect()
}
