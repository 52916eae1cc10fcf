//! Stable descending ranking.

use mig_model::{CountySummary, OriginAggregate, RankedCounty};

/// Sorts rows descending by `key`, keeping the incoming order of ties.
pub fn rank_by<T, F>(mut rows: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> u64,
{
    // `sort_by` is stable; comparing b to a gives descending order.
    rows.sort_by(|a, b| key(b).cmp(&key(a)));
    rows
}

pub fn rank_origins(origins: Vec<OriginAggregate>) -> Vec<OriginAggregate> {
    rank_by(origins, |origin| origin.inbound_from_state)
}

/// Orders counties by total migration and attaches 1-based ranks.
pub fn rank_counties(counties: Vec<CountySummary>) -> Vec<RankedCounty> {
    rank_by(counties, |county| county.total_migration)
        .into_iter()
        .enumerate()
        .map(|(idx, summary)| RankedCounty {
            rank: idx + 1,
            summary,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn summary(county: &str, total: u64) -> CountySummary {
        CountySummary {
            county: county.to_string(),
            total_migration: total,
            total_internal_migration: total,
            total_external_migration: 0,
            pct_internal: if total > 0 { 100.0 } else { 0.0 },
            pct_external: 0.0,
        }
    }

    #[test]
    fn ranks_descending_with_stable_ties() {
        let ranked = rank_counties(vec![
            summary("Park", 50),
            summary("Gallatin", 200),
            summary("Carbon", 50),
            summary("Petroleum", 0),
        ]);
        let order: Vec<(usize, &str)> = ranked.iter().map(|r| (r.rank, r.county())).collect();
        assert_eq!(
            order,
            vec![(1, "Gallatin"), (2, "Park"), (3, "Carbon"), (4, "Petroleum")]
        );
    }

    #[test]
    fn ranking_leaves_percentages_alone() {
        let mut row = summary("Park", 10);
        row.pct_internal = 12.34;
        let ranked = rank_counties(vec![row.clone()]);
        assert_eq!(ranked[0].summary, row);
    }

    proptest! {
        #[test]
        fn ties_keep_encounter_order(totals in prop::collection::vec(0u64..4, 0..40)) {
            let rows: Vec<(usize, u64)> = totals.iter().copied().enumerate().collect();
            let ranked = rank_by(rows, |row| row.1);

            for pair in ranked.windows(2) {
                prop_assert!(pair[0].1 >= pair[1].1);
                if pair[0].1 == pair[1].1 {
                    prop_assert!(pair[0].0 < pair[1].0);
                }
            }
            prop_assert_eq!(ranked.len(), totals.len());
        }
    }
}
