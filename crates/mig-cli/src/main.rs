//! Montana inbound migration analysis CLI.

use clap::Parser;
use mig_cli::logging::init_logging;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{run_analyze, run_verify};
use crate::summary::{print_analysis_summary, print_load_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config();
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Analyze(args) => match run_analyze(&args) {
            Ok(outcome) => {
                print_load_summary(&outcome.load, &args.states);
                print_analysis_summary(&outcome, args.summary_rows);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Verify(args) => run_verify(&args),
    };
    std::process::exit(exit_code);
}
