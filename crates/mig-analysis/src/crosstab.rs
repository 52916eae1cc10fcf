//! Top-N county cross tabulations.

use std::fmt;
use std::str::FromStr;

use mig_model::{CrossTabRow, RankedCounty, TOTAL_LABEL, percent_of};

use crate::detail::CountyDetail;
use crate::error::AnalysisError;

/// Size of a top-N counties x top-M origins cross tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrossTabSpec {
    pub counties: usize,
    pub origins: usize,
}

impl CrossTabSpec {
    pub fn new(counties: usize, origins: usize) -> Self {
        Self { counties, origins }
    }
}

impl fmt::Display for CrossTabSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.counties, self.origins)
    }
}

impl FromStr for CrossTabSpec {
    type Err = AnalysisError;

    /// Parses `<counties>x<origins>`, e.g. `10x5`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| AnalysisError::InvalidCrossTab {
            value: value.to_string(),
            reason: reason.to_string(),
        };
        let (counties, origins) = value
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| invalid("expected <counties>x<origins>"))?;
        let counties: usize = counties
            .trim()
            .parse()
            .map_err(|_| invalid("county count is not a number"))?;
        let origins: usize = origins
            .trim()
            .parse()
            .map_err(|_| invalid("origin count is not a number"))?;
        if counties == 0 || origins == 0 {
            return Err(invalid("counts must be at least 1"));
        }
        Ok(Self { counties, origins })
    }
}

/// The top `spec.origins` origins of each of the top `spec.counties`
/// counties.
///
/// `details` must be in county rank order with rows already descending by
/// inbound count. Counties whose total is zero are skipped.
pub fn top_origins_by_county(details: &[CountyDetail], spec: CrossTabSpec) -> Vec<CrossTabRow> {
    details
        .iter()
        .take(spec.counties)
        .filter(|detail| detail.total > 0)
        .flat_map(|detail| {
            detail.rows.iter().take(spec.origins).map(|row| CrossTabRow {
                county: detail.county.clone(),
                origin_state: row.origin_state.clone(),
                inbound_from_state: row.inbound_from_state,
                pct_of_total: percent_of(row.inbound_from_state, detail.total),
            })
        })
        .collect()
}

/// One `Total` row for each of the top `counties` counties, with its share of
/// the grand total across every county.
///
/// The grand total saturates at `u64::MAX`; [`crate::analyze`] rejects input
/// whose total does not fit before this runs.
pub fn top_county_totals(ranked: &[RankedCounty], counties: usize) -> Vec<CrossTabRow> {
    let grand_total = ranked
        .iter()
        .map(RankedCounty::total)
        .fold(0u64, u64::saturating_add);
    ranked
        .iter()
        .take(counties)
        .map(|entry| CrossTabRow {
            county: entry.county().to_string(),
            origin_state: TOTAL_LABEL.to_string(),
            inbound_from_state: entry.total(),
            pct_of_total: percent_of(entry.total(), grand_total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate_by_county;
    use crate::detail::build_county_details;
    use crate::rank::rank_counties;
    use mig_model::{MigrationRecord, ReferenceStateList};
    use proptest::prelude::*;

    fn fixture() -> (Vec<RankedCounty>, Vec<CountyDetail>) {
        let records = vec![
            MigrationRecord::new("Gallatin", "California", 120),
            MigrationRecord::new("Gallatin", "Texas", 80),
            MigrationRecord::new("Gallatin", "Asia", 40),
            MigrationRecord::new("Yellowstone", "California", 50),
            MigrationRecord::new("Petroleum", "Idaho", 0),
            MigrationRecord::new("Park", "Idaho", 10),
        ];
        let states = ReferenceStateList::from_names(["California", "Idaho", "Texas"]);
        let ranked = rank_counties(aggregate_by_county(&records, &states).unwrap());
        let details = build_county_details(&records, &ranked).unwrap();
        (ranked, details)
    }

    #[test]
    fn parses_spec_literals() {
        assert_eq!("10x5".parse::<CrossTabSpec>(), Ok(CrossTabSpec::new(10, 5)));
        assert_eq!(" 3X2 ".parse::<CrossTabSpec>(), Ok(CrossTabSpec::new(3, 2)));
        assert_eq!(CrossTabSpec::new(10, 5).to_string(), "10x5");
        assert!("10".parse::<CrossTabSpec>().is_err());
        assert!("0x5".parse::<CrossTabSpec>().is_err());
        assert!("tenxfive".parse::<CrossTabSpec>().is_err());
    }

    #[test]
    fn top_origins_limits_both_dimensions() {
        let (_, details) = fixture();
        let rows = top_origins_by_county(&details, CrossTabSpec::new(2, 2));
        let flat: Vec<(&str, &str, u64, f64)> = rows
            .iter()
            .map(|row| {
                (
                    row.county.as_str(),
                    row.origin_state.as_str(),
                    row.inbound_from_state,
                    row.pct_of_total,
                )
            })
            .collect();
        assert_eq!(
            flat,
            vec![
                ("Gallatin", "California", 120, 50.0),
                ("Gallatin", "Texas", 80, 33.33),
                ("Yellowstone", "California", 50, 100.0),
            ]
        );
    }

    #[test]
    fn oversized_spec_returns_what_exists_and_skips_zero_totals() {
        let (_, details) = fixture();
        let rows = top_origins_by_county(&details, CrossTabSpec::new(50, 50));
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row.county != "Petroleum"));
    }

    #[test]
    fn county_totals_share_the_full_grand_total() {
        let (ranked, _) = fixture();
        let rows = top_county_totals(&ranked, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].county, "Gallatin");
        assert_eq!(rows[0].origin_state, TOTAL_LABEL);
        assert_eq!(rows[0].inbound_from_state, 240);
        assert_eq!(rows[0].pct_of_total, 80.0);
        assert_eq!(rows[1].county, "Yellowstone");
        assert_eq!(rows[1].pct_of_total, 16.67);

        assert_eq!(top_county_totals(&ranked, 100).len(), 4);
    }

    #[test]
    fn county_totals_with_zero_grand_total() {
        let records = vec![MigrationRecord::new("Petroleum", "Idaho", 0)];
        let ranked =
            rank_counties(aggregate_by_county(&records, &ReferenceStateList::default()).unwrap());
        let rows = top_county_totals(&ranked, 1);
        assert_eq!(rows[0].pct_of_total, 0.0);
    }

    proptest! {
        #[test]
        fn row_count_is_sum_of_capped_origin_counts(
            counts in prop::collection::vec((0usize..5, 0usize..6, 0u64..20), 1..60),
            n in 1usize..8,
            m in 1usize..8,
        ) {
            let records: Vec<MigrationRecord> = counts
                .iter()
                .map(|(county, origin, inbound)| {
                    MigrationRecord::new(format!("C{county}"), format!("O{origin}"), *inbound)
                })
                .collect();
            let ranked = rank_counties(
                aggregate_by_county(&records, &ReferenceStateList::default()).unwrap(),
            );
            let details = build_county_details(&records, &ranked).unwrap();

            let expected: usize = details
                .iter()
                .take(n)
                .filter(|detail| detail.total > 0)
                .map(|detail| detail.rows.len().min(m))
                .sum();
            let rows = top_origins_by_county(&details, CrossTabSpec::new(n, m));
            prop_assert_eq!(rows.len(), expected);
            prop_assert!(rows.len() <= n * m);
        }
    }
}
