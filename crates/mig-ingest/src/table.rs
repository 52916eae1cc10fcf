//! Raw survey table reading with Polars.

use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

pub const COUNTY_COLUMN: &str = "county";
pub const ORIGIN_COLUMN: &str = "originState";
pub const INBOUND_COLUMN: &str = "inboundFromState";

/// Columns the raw table must carry, in any order.
pub const REQUIRED_COLUMNS: [&str; 3] = [COUNTY_COLUMN, ORIGIN_COLUMN, INBOUND_COLUMN];

/// The three required columns, resolved against a loaded frame.
#[derive(Debug, Clone, Copy)]
pub struct MigrationColumns<'a> {
    pub county: &'a Column,
    pub origin: &'a Column,
    pub inbound: &'a Column,
}

/// Normalizes a header value by trimming whitespace and a leading BOM.
pub fn normalize_header(value: &str) -> &str {
    value.trim().trim_start_matches('\u{feff}').trim()
}

/// Reads the raw survey CSV into a DataFrame.
///
/// Every column is read as text; counts are coerced row by row so that a
/// stray non-numeric cell does not fail the whole table.
pub fn read_raw_table(path: &Path) -> Result<DataFrame> {
    std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Locates the required columns by normalized header name.
pub fn resolve_columns<'a>(df: &'a DataFrame, path: &Path) -> Result<MigrationColumns<'a>> {
    let lookup = |wanted: &str| -> Result<&'a Column> {
        let name = df
            .get_column_names()
            .into_iter()
            .find(|name| normalize_header(name.as_str()) == wanted)
            .ok_or_else(|| IngestError::MissingColumn {
                column: wanted.to_string(),
                path: path.to_path_buf(),
            })?;
        Ok(df.column(name.as_str())?)
    };
    Ok(MigrationColumns {
        county: lookup(COUNTY_COLUMN)?,
        origin: lookup(ORIGIN_COLUMN)?,
        inbound: lookup(INBOUND_COLUMN)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  county  "), "county");
        assert_eq!(normalize_header("\u{feff}county"), "county");
    }

    #[test]
    fn test_read_raw_table_reads_text_columns() {
        let file = create_temp_csv("county,originState,inboundFromState\nGallatin,Texas,80\n");
        let df = read_raw_table(file.path()).unwrap();

        assert_eq!(df.height(), 1);
        assert_eq!(df.width(), 3);
        assert_eq!(df.column(INBOUND_COLUMN).unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn test_resolve_columns_any_order() {
        let file = create_temp_csv("inboundFromState,extra,county,originState\n5,x,Park,Idaho\n");
        let df = read_raw_table(file.path()).unwrap();
        let columns = resolve_columns(&df, file.path()).unwrap();

        assert_eq!(columns.county.name().as_str(), COUNTY_COLUMN);
        assert_eq!(columns.origin.name().as_str(), ORIGIN_COLUMN);
        assert_eq!(columns.inbound.name().as_str(), INBOUND_COLUMN);
    }

    #[test]
    fn test_resolve_columns_missing() {
        let file = create_temp_csv("county,inboundFromState\nPark,5\n");
        let df = read_raw_table(file.path()).unwrap();
        let result = resolve_columns(&df, file.path());

        assert!(matches!(
            result,
            Err(IngestError::MissingColumn { ref column, .. }) if column == ORIGIN_COLUMN
        ));
    }

    #[test]
    fn test_read_raw_table_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_raw_table(&dir.path().join("absent.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
