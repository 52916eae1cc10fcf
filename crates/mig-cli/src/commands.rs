use anyhow::Result;
use tracing::{error, info_span};

use mig_analysis::AnalysisOptions;
use mig_ingest::LoadOptions;
use mig_report::{OutputLayout, VerifyError, sum_column};

use mig_cli::pipeline::{PipelineConfig, PipelineOutcome, run_pipeline};

use crate::cli::{AnalyzeArgs, VerifyArgs};
use crate::summary::print_verify_summary;

pub fn pipeline_config(args: &AnalyzeArgs) -> PipelineConfig {
    PipelineConfig {
        data_path: args.data.clone(),
        states_path: args.states.clone(),
        layout: OutputLayout::new(&args.output_dir),
        load: LoadOptions {
            destination: args.destination.clone(),
        },
        analysis: AnalysisOptions::default()
            .with_cross_tabs(args.cross_tabs.clone())
            .with_top_totals(args.top_totals),
    }
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<PipelineOutcome> {
    println!("Starting inbound migration analysis for {}...", args.destination);
    println!("{}", "=".repeat(50));
    run_pipeline(&pipeline_config(args))
}

/// Runs the verifier and returns the process exit code.
pub fn run_verify(args: &VerifyArgs) -> i32 {
    let span = info_span!("verify", path = %args.path.display(), column = %args.column);
    let _guard = span.enter();
    match sum_column(&args.path, &args.column) {
        Ok(total) => {
            print_verify_summary(&total);
            0
        }
        Err(err) => {
            error!(error = %err, "verification failed");
            match &err {
                VerifyError::NotFound { .. } | VerifyError::MissingColumn { .. } => {
                    println!("{err}");
                }
                VerifyError::Read { .. } | VerifyError::Overflow { .. } => {
                    eprintln!("error: {err}");
                }
            }
            err.exit_code()
        }
    }
}
