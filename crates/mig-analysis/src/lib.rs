//! Inbound migration analysis.
//!
//! The analysis runs in fixed stages over one in-memory record set:
//! 1. **Aggregate**: totals by origin, internal/external split by county
//! 2. **Rank**: stable descending sort of origins and counties
//! 3. **Detail**: per-county origin breakdown in county rank order
//! 4. **Cross tab**: top-N counties by top-M origins, and top-N county totals

pub mod aggregate;
pub mod crosstab;
pub mod detail;
mod error;
pub mod options;
pub mod rank;

use std::time::Instant;

use tracing::{debug, info};

use mig_model::{CrossTabRow, MigrationRecord, OriginAggregate, RankedCounty, ReferenceStateList};

pub use aggregate::{ALL_RECORDS_KEY, aggregate_by_county, aggregate_by_origin, checked_grand_total};
pub use crosstab::{CrossTabSpec, top_county_totals, top_origins_by_county};
pub use detail::{CountyDetail, build_county_details, detail_unit_name};
pub use error::AnalysisError;
pub use options::{AnalysisOptions, DEFAULT_CROSS_TAB, DEFAULT_TOP_TOTALS};
pub use rank::{rank_by, rank_counties, rank_origins};

/// A cross tab together with the parameters that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossTab {
    pub spec: CrossTabSpec,
    pub rows: Vec<CrossTabRow>,
}

/// Top county grand totals and the county count that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct CountyTotals {
    pub counties: usize,
    /// One row per county, `originState` = `Total`.
    pub rows: Vec<CrossTabRow>,
}

/// Every derived row set of one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationAnalysis {
    /// Origins descending by inbound count.
    pub origins: Vec<OriginAggregate>,
    /// Counties descending by total migration, with ranks.
    pub counties: Vec<RankedCounty>,
    /// One detail per county, in rank order.
    pub details: Vec<CountyDetail>,
    pub cross_tabs: Vec<CrossTab>,
    pub county_totals: CountyTotals,
}

impl MigrationAnalysis {
    /// Sum of `totalMigration` across all counties.
    pub fn grand_total(&self) -> u64 {
        self.counties
            .iter()
            .map(RankedCounty::total)
            .fold(0u64, u64::saturating_add)
    }
}

/// Runs every analysis stage over the filtered records.
///
/// # Errors
///
/// [`AnalysisError::CountOverflow`] if the inbound counts do not sum within
/// `u64`.
pub fn analyze(
    records: &[MigrationRecord],
    states: &ReferenceStateList,
    options: &AnalysisOptions,
) -> Result<MigrationAnalysis, AnalysisError> {
    let start = Instant::now();

    let grand_total = checked_grand_total(records)?;
    let origins = rank_origins(aggregate_by_origin(records)?);
    let counties = rank_counties(aggregate_by_county(records, states)?);
    debug!(
        origins = origins.len(),
        counties = counties.len(),
        "aggregation complete"
    );

    let details = build_county_details(records, &counties)?;
    let cross_tabs = options
        .cross_tabs
        .iter()
        .map(|spec| CrossTab {
            spec: *spec,
            rows: top_origins_by_county(&details, *spec),
        })
        .collect();
    let county_totals = CountyTotals {
        counties: options.top_totals,
        rows: top_county_totals(&counties, options.top_totals),
    };

    let analysis = MigrationAnalysis {
        origins,
        counties,
        details,
        cross_tabs,
        county_totals,
    };
    info!(
        records = records.len(),
        origins = analysis.origins.len(),
        counties = analysis.counties.len(),
        grand_total,
        duration_ms = start.elapsed().as_millis(),
        "analysis complete"
    );
    Ok(analysis)
}
