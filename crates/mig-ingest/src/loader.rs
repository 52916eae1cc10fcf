//! Survey dataset loading with the destination-region filter.

use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use mig_model::{MigrationRecord, ReferenceStateList};

use crate::coerce::{any_to_count, any_to_text};
use crate::error::Result;
use crate::reference::load_reference_states;
use crate::table::{read_raw_table, resolve_columns};

/// Destination region whose self-referencing rows are excluded.
pub const DEFAULT_DESTINATION: &str = "montana";

/// Options controlling how the survey table is filtered.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Origin label (compared trimmed and case-folded) to drop.
    pub destination: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            destination: DEFAULT_DESTINATION.to_string(),
        }
    }
}

/// Filtered records plus the reference list they are classified against.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub records: Vec<MigrationRecord>,
    pub states: ReferenceStateList,
    /// Rows whose count could not be coerced and was read as zero.
    pub skipped_counts: usize,
    /// Rows dropped because their origin is the destination itself.
    pub excluded_rows: usize,
}

impl LoadedDataset {
    /// Number of distinct counties among the loaded records.
    pub fn county_count(&self) -> usize {
        self.records
            .iter()
            .map(|record| record.county.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Returns true if `origin` names the destination region itself.
pub fn is_destination(origin: &str, destination: &str) -> bool {
    origin.trim().to_lowercase() == destination.trim().to_lowercase()
}

/// Loads the raw survey table and the reference state list.
///
/// # Errors
///
/// Fails if either file is missing or the table lacks one of the
/// required columns. Unparsable counts are not errors.
pub fn load_dataset(
    data_path: &Path,
    states_path: &Path,
    options: &LoadOptions,
) -> Result<LoadedDataset> {
    let start = Instant::now();
    let df = read_raw_table(data_path)?;
    let columns = resolve_columns(&df, data_path)?;
    let states = load_reference_states(states_path)?;

    let mut records = Vec::with_capacity(df.height());
    let mut skipped_counts = 0usize;
    let mut excluded_rows = 0usize;
    for idx in 0..df.height() {
        let origin = any_to_text(columns.origin.get(idx)?);
        if is_destination(&origin, &options.destination) {
            excluded_rows += 1;
            continue;
        }
        let county = any_to_text(columns.county.get(idx)?);
        let inbound = match any_to_count(columns.inbound.get(idx)?) {
            Ok(count) => count,
            Err(error) => {
                warn!(
                    path = %data_path.display(),
                    row = idx + 1,
                    %county,
                    %origin,
                    %error,
                    "count read as zero"
                );
                skipped_counts += 1;
                0
            }
        };
        records.push(MigrationRecord::new(county, origin, inbound));
    }

    debug!(
        path = %data_path.display(),
        excluded_rows,
        destination = %options.destination,
        "destination rows excluded"
    );
    let dataset = LoadedDataset {
        records,
        states,
        skipped_counts,
        excluded_rows,
    };
    info!(
        path = %data_path.display(),
        rows = dataset.records.len(),
        counties = dataset.county_count(),
        states = dataset.states.len(),
        skipped_counts,
        duration_ms = start.elapsed().as_millis(),
        "dataset loaded"
    );
    Ok(dataset)
}
