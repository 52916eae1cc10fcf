//! Grouping passes over the filtered survey records.
//!
//! Both passes keep groups in order of first appearance; ranking is a
//! separate step (see [`crate::rank`]).

use std::collections::HashMap;

use mig_model::{
    CountySummary, MigrationRecord, OriginAggregate, ReferenceStateList, percent_of,
};

use crate::error::AnalysisError;

/// Key reported when the sum over every record overflows.
pub const ALL_RECORDS_KEY: &str = "all records";

pub(crate) fn add_count(total: u64, count: u64, key: &str) -> Result<u64, AnalysisError> {
    total
        .checked_add(count)
        .ok_or_else(|| AnalysisError::CountOverflow {
            key: key.to_string(),
        })
}

/// Sum of every inbound count. Once this fits, every partial sum fits too.
pub fn checked_grand_total(records: &[MigrationRecord]) -> Result<u64, AnalysisError> {
    records.iter().try_fold(0u64, |total, record| {
        add_count(total, record.inbound_from_state, ALL_RECORDS_KEY)
    })
}

/// Sums inbound counts per origin across all counties.
pub fn aggregate_by_origin(
    records: &[MigrationRecord],
) -> Result<Vec<OriginAggregate>, AnalysisError> {
    sum_by_origin(records)
}

/// Per-origin sums over any selection of records, in first-appearance order.
pub(crate) fn sum_by_origin<'a, I>(records: I) -> Result<Vec<OriginAggregate>, AnalysisError>
where
    I: IntoIterator<Item = &'a MigrationRecord>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut origins: Vec<OriginAggregate> = Vec::new();
    for record in records {
        let slot = *index.entry(record.origin_state.as_str()).or_insert_with(|| {
            origins.push(OriginAggregate {
                origin_state: record.origin_state.clone(),
                inbound_from_state: 0,
            });
            origins.len() - 1
        });
        let origin = &mut origins[slot];
        origin.inbound_from_state = add_count(
            origin.inbound_from_state,
            record.inbound_from_state,
            &record.origin_state,
        )?;
    }
    Ok(origins)
}

#[derive(Debug, Default, Clone, Copy)]
struct SplitTotals {
    internal: u64,
    external: u64,
}

/// Sums inbound counts per county, split into internal (origin found in
/// `states`) and external (anything else).
pub fn aggregate_by_county(
    records: &[MigrationRecord],
    states: &ReferenceStateList,
) -> Result<Vec<CountySummary>, AnalysisError> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counties: Vec<(&str, SplitTotals)> = Vec::new();
    for record in records {
        let slot = *index.entry(record.county.as_str()).or_insert_with(|| {
            counties.push((record.county.as_str(), SplitTotals::default()));
            counties.len() - 1
        });
        let totals = &mut counties[slot].1;
        let part = if states.contains(&record.origin_state) {
            &mut totals.internal
        } else {
            &mut totals.external
        };
        *part = add_count(*part, record.inbound_from_state, &record.county)?;
    }

    counties
        .into_iter()
        .map(|(county, totals)| {
            let total = add_count(totals.internal, totals.external, county)?;
            Ok(CountySummary {
                county: county.to_string(),
                total_migration: total,
                total_internal_migration: totals.internal,
                total_external_migration: totals.external,
                pct_internal: percent_of(totals.internal, total),
                pct_external: percent_of(totals.external, total),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<MigrationRecord> {
        vec![
            MigrationRecord::new("Yellowstone", "Texas", 30),
            MigrationRecord::new("Gallatin", "California", 120),
            MigrationRecord::new("Gallatin", "Asia", 40),
            MigrationRecord::new("Yellowstone", "California", 50),
            MigrationRecord::new("Gallatin", "Texas", 80),
        ]
    }

    #[test]
    fn origins_keep_first_appearance_order() {
        let origins = aggregate_by_origin(&records()).unwrap();
        let pairs: Vec<(&str, u64)> = origins
            .iter()
            .map(|o| (o.origin_state.as_str(), o.inbound_from_state))
            .collect();
        assert_eq!(
            pairs,
            vec![("Texas", 110), ("California", 170), ("Asia", 40)]
        );
    }

    #[test]
    fn county_split_classifies_by_reference_list() {
        let states = ReferenceStateList::from_names(["California", "Texas"]);
        let counties = aggregate_by_county(&records(), &states).unwrap();

        assert_eq!(counties.len(), 2);
        assert_eq!(counties[0].county, "Yellowstone");
        assert_eq!(counties[0].total_migration, 80);
        assert_eq!(counties[0].total_external_migration, 0);
        assert_eq!(counties[0].pct_internal, 100.0);

        let gallatin = &counties[1];
        assert_eq!(gallatin.total_migration, 240);
        assert_eq!(gallatin.total_internal_migration, 200);
        assert_eq!(gallatin.total_external_migration, 40);
        assert_eq!(gallatin.pct_internal, 83.33);
        assert_eq!(gallatin.pct_external, 16.67);
    }

    #[test]
    fn zero_total_county_has_zero_percentages() {
        let states = ReferenceStateList::from_names(["Idaho"]);
        let counties =
            aggregate_by_county(&[MigrationRecord::new("Petroleum", "Idaho", 0)], &states).unwrap();

        assert_eq!(counties[0].total_migration, 0);
        assert_eq!(counties[0].pct_internal, 0.0);
        assert_eq!(counties[0].pct_external, 0.0);
    }

    #[test]
    fn blank_keys_are_ordinary_groups() {
        let states = ReferenceStateList::default();
        let records = vec![
            MigrationRecord::new("", "  ", 3),
            MigrationRecord::new("", "  ", 4),
        ];
        let counties = aggregate_by_county(&records, &states).unwrap();
        let origins = aggregate_by_origin(&records).unwrap();

        assert_eq!(counties.len(), 1);
        assert_eq!(counties[0].total_external_migration, 7);
        assert_eq!(origins[0].origin_state, "  ");
        assert_eq!(origins[0].inbound_from_state, 7);
    }

    #[test]
    fn overflowing_sums_are_errors() {
        let states = ReferenceStateList::from_names(["Texas"]);
        let records = vec![
            MigrationRecord::new("Gallatin", "Texas", u64::MAX),
            MigrationRecord::new("Park", "Texas", 1),
        ];

        assert_eq!(
            aggregate_by_origin(&records),
            Err(AnalysisError::CountOverflow {
                key: "Texas".to_string()
            })
        );
        assert!(aggregate_by_county(&records, &states).is_ok());
        assert_eq!(
            checked_grand_total(&records),
            Err(AnalysisError::CountOverflow {
                key: ALL_RECORDS_KEY.to_string()
            })
        );

        let split = vec![
            MigrationRecord::new("Gallatin", "Texas", u64::MAX),
            MigrationRecord::new("Gallatin", "Asia", 1),
        ];
        assert_eq!(
            aggregate_by_county(&split, &states),
            Err(AnalysisError::CountOverflow {
                key: "Gallatin".to_string()
            })
        );
    }

    #[test]
    fn grand_total_sums_every_record() {
        assert_eq!(checked_grand_total(&records()), Ok(320));
        assert_eq!(checked_grand_total(&[]), Ok(0));
    }
}
