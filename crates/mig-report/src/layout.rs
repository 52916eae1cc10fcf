//! Output directory layout and report file names.

use std::fs;
use std::path::{Path, PathBuf};

use mig_analysis::CrossTabSpec;

use crate::error::{ReportError, Result};

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const OVERALL_FILE: &str = "montana-migration.csv";
pub const COUNTY_SUMMARY_FILE: &str = "total-migration-by-county.csv";
pub const DETAIL_DIR: &str = "by-county";
pub const REPORT_EXTENSION: &str = "csv";

/// Where each report lands under the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn overall_path(&self) -> PathBuf {
        self.root.join(OVERALL_FILE)
    }

    pub fn county_summary_path(&self) -> PathBuf {
        self.root.join(COUNTY_SUMMARY_FILE)
    }

    pub fn detail_dir(&self) -> PathBuf {
        self.root.join(DETAIL_DIR)
    }

    /// `by-county/<unit_name>.csv`
    pub fn detail_path(&self, unit_name: &str) -> PathBuf {
        self.detail_dir()
            .join(format!("{unit_name}.{REPORT_EXTENSION}"))
    }

    /// `top-<M>-origins-top-<N>-counties.csv`
    pub fn cross_tab_path(&self, spec: CrossTabSpec) -> PathBuf {
        self.root.join(format!(
            "top-{}-origins-top-{}-counties.{REPORT_EXTENSION}",
            spec.origins, spec.counties
        ))
    }

    /// `top-<N>-counties-total.csv`
    pub fn county_totals_path(&self, counties: usize) -> PathBuf {
        self.root
            .join(format!("top-{counties}-counties-total.{REPORT_EXTENSION}"))
    }

    /// Creates the output root and the detail directory. Safe to repeat.
    pub fn ensure_dirs(&self) -> Result<()> {
        let detail_dir = self.detail_dir();
        fs::create_dir_all(&detail_dir).map_err(|e| ReportError::Io {
            operation: "create directory",
            path: detail_dir,
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_naming_convention() {
        let layout = OutputLayout::new("out");
        assert_eq!(layout.overall_path(), Path::new("out/montana-migration.csv"));
        assert_eq!(
            layout.county_summary_path(),
            Path::new("out/total-migration-by-county.csv")
        );
        assert_eq!(
            layout.detail_path("3-lewis-and-clark"),
            Path::new("out/by-county/3-lewis-and-clark.csv")
        );
        assert_eq!(
            layout.cross_tab_path(CrossTabSpec::new(10, 5)),
            Path::new("out/top-5-origins-top-10-counties.csv")
        );
        assert_eq!(
            layout.county_totals_path(10),
            Path::new("out/top-10-counties-total.csv")
        );
    }

    #[test]
    fn ensure_dirs_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(dir.path().join("output"));

        layout.ensure_dirs().unwrap();
        layout.ensure_dirs().unwrap();

        assert!(layout.detail_dir().is_dir());
    }
}
