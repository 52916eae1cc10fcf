//! Survey data ingestion.
//!
//! This crate loads the raw inbound migration table (CSV, via Polars) and the
//! reference list of US states/territories, and drops rows whose origin is
//! the destination region itself.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use mig_ingest::{LoadOptions, load_dataset};
//!
//! let dataset = load_dataset(
//!     Path::new("data/2018-2022-american-community-survey-MT.csv"),
//!     Path::new("data/states.txt"),
//!     &LoadOptions::default(),
//! )?;
//! println!("{} rows, {} counties", dataset.records.len(), dataset.county_count());
//! ```

mod coerce;
mod error;
mod loader;
mod reference;
mod table;

// === Error Types ===
pub use error::{IngestError, Result, UnparsableValue};

// === Count Coercion ===
pub use coerce::{any_to_count, any_to_text, coerce_count, coerce_integer};

// === Loading ===
pub use loader::{DEFAULT_DESTINATION, LoadOptions, LoadedDataset, is_destination, load_dataset};
pub use reference::load_reference_states;
pub use table::{
    COUNTY_COLUMN, INBOUND_COLUMN, ORIGIN_COLUMN, REQUIRED_COLUMNS, read_raw_table,
    resolve_columns,
};
