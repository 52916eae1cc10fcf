//! Writes every report of an analysis run under an [`OutputLayout`].

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, info_span};

use mig_analysis::{CrossTabSpec, MigrationAnalysis};
use mig_model::{CountySummary, ReportRow};

use crate::error::Result;
use crate::layout::OutputLayout;
use crate::writer::write_report;

/// A report file that was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    pub path: PathBuf,
    pub rows: usize,
}

/// A cross tab file and the parameters encoded in its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenCrossTab {
    pub spec: CrossTabSpec,
    pub report: WrittenReport,
}

/// Paths and row counts of all files produced by [`write_analysis`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOutputs {
    pub overall: WrittenReport,
    pub county_summary: WrittenReport,
    /// One file per county, in rank order.
    pub details: Vec<WrittenReport>,
    pub cross_tabs: Vec<WrittenCrossTab>,
    pub county_totals: WrittenReport,
}

fn write_one<R: ReportRow>(path: PathBuf, rows: &[R]) -> Result<WrittenReport> {
    let rows = write_report(&path, rows)?;
    Ok(WrittenReport { path, rows })
}

/// Writes the overall, county summary, per-county detail and cross tab
/// reports. Directories are created once, before the first write.
pub fn write_analysis(
    layout: &OutputLayout,
    analysis: &MigrationAnalysis,
) -> Result<AnalysisOutputs> {
    let span = info_span!("write", output_dir = %layout.root().display());
    let _guard = span.enter();
    let start = Instant::now();

    layout.ensure_dirs()?;

    let overall = write_one(layout.overall_path(), &analysis.origins)?;
    info!(path = %overall.path.display(), rows = overall.rows, "overall origin totals written");

    let summaries: Vec<CountySummary> = analysis
        .counties
        .iter()
        .map(|ranked| ranked.summary.clone())
        .collect();
    let county_summary = write_one(layout.county_summary_path(), &summaries)?;
    info!(
        path = %county_summary.path.display(),
        rows = county_summary.rows,
        "county summary written"
    );

    let details = analysis
        .details
        .iter()
        .map(|detail| write_one(layout.detail_path(&detail.unit_name()), &detail.rows))
        .collect::<Result<Vec<_>>>()?;
    info!(
        dir = %layout.detail_dir().display(),
        files = details.len(),
        "county detail files written"
    );

    let cross_tabs = analysis
        .cross_tabs
        .iter()
        .map(|cross_tab| {
            let report = write_one(layout.cross_tab_path(cross_tab.spec), &cross_tab.rows)?;
            info!(
                path = %report.path.display(),
                rows = report.rows,
                spec = %cross_tab.spec,
                "cross tab written"
            );
            Ok(WrittenCrossTab {
                spec: cross_tab.spec,
                report,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let county_totals = write_one(
        layout.county_totals_path(analysis.county_totals.counties),
        &analysis.county_totals.rows,
    )?;
    info!(
        path = %county_totals.path.display(),
        rows = county_totals.rows,
        "county totals written"
    );

    info!(
        files = 3 + details.len() + cross_tabs.len(),
        duration_ms = start.elapsed().as_millis(),
        "reports written"
    );
    Ok(AnalysisOutputs {
        overall,
        county_summary,
        details,
        cross_tabs,
        county_totals,
    })
}
