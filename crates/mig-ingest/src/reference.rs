//! Reference list of US states and territories.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use mig_model::ReferenceStateList;

use crate::error::{IngestError, Result};

/// Reads one state/territory name per line.
///
/// Surrounding whitespace is stripped and blank lines are ignored, so an
/// empty origin label is never internal. There is no header line.
pub fn load_reference_states(path: &Path) -> Result<ReferenceStateList> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let reader = BufReader::new(file);

    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let name = line.strip_prefix('\u{feff}').unwrap_or(&line).trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(ReferenceStateList::from_names(names))
}
