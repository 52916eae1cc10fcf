//! Analysis pipeline: load, analyze, write.
//!
//! Each stage runs inside its own `tracing` span so a run can be followed
//! stage by stage in the logs. Stages stop at the first error and nothing is
//! written unless loading and analysis both succeed.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use mig_analysis::{AnalysisOptions, MigrationAnalysis, analyze};
use mig_ingest::{LoadOptions, LoadedDataset, load_dataset};
use mig_report::{AnalysisOutputs, OutputLayout, write_analysis};

/// Inputs of one analysis run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub data_path: PathBuf,
    pub states_path: PathBuf,
    pub layout: OutputLayout,
    pub load: LoadOptions,
    pub analysis: AnalysisOptions,
}

/// Counts describing the loaded input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// Rows kept after dropping destination-origin rows.
    pub rows: usize,
    pub counties: usize,
    /// Entries in the reference state list.
    pub states: usize,
    pub excluded_rows: usize,
    pub skipped_counts: usize,
}

impl LoadSummary {
    fn from_dataset(dataset: &LoadedDataset) -> Self {
        Self {
            rows: dataset.records.len(),
            counties: dataset.county_count(),
            states: dataset.states.len(),
            excluded_rows: dataset.excluded_rows,
            skipped_counts: dataset.skipped_counts,
        }
    }
}

/// Everything a completed run produced.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub load: LoadSummary,
    pub analysis: MigrationAnalysis,
    pub outputs: AnalysisOutputs,
}

/// Load stage.
pub fn load(config: &PipelineConfig) -> Result<LoadedDataset> {
    let span = info_span!("load", data = %config.data_path.display());
    let _guard = span.enter();
    load_dataset(&config.data_path, &config.states_path, &config.load).with_context(|| {
        format!(
            "load {} with states from {}",
            config.data_path.display(),
            config.states_path.display()
        )
    })
}

/// Analysis stage. Pure; fails only if the counts overflow.
pub fn run_analysis(
    dataset: &LoadedDataset,
    options: &AnalysisOptions,
) -> Result<MigrationAnalysis> {
    let span = info_span!("aggregate", records = dataset.records.len());
    let _guard = span.enter();
    analyze(&dataset.records, &dataset.states, options).context("aggregate inbound counts")
}

/// Output stage.
pub fn write(layout: &OutputLayout, analysis: &MigrationAnalysis) -> Result<AnalysisOutputs> {
    write_analysis(layout, analysis)
        .with_context(|| format!("write reports to {}", layout.root().display()))
}

/// Runs all stages in order.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineOutcome> {
    let start = Instant::now();

    let dataset = load(config)?;
    let load = LoadSummary::from_dataset(&dataset);
    let analysis = run_analysis(&dataset, &config.analysis)?;
    let outputs = write(&config.layout, &analysis)?;

    info!(
        rows = load.rows,
        counties = load.counties,
        reports = outputs.details.len() + outputs.cross_tabs.len() + 3,
        duration_ms = start.elapsed().as_millis(),
        "pipeline complete"
    );
    Ok(PipelineOutcome {
        load,
        analysis,
        outputs,
    })
}
