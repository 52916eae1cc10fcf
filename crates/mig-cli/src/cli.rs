//! CLI argument definitions for the migration analysis.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use mig_cli::logging::{LogConfig, LogFormat};

use mig_analysis::{CrossTabSpec, DEFAULT_CROSS_TAB, DEFAULT_TOP_TOTALS};
use mig_ingest::DEFAULT_DESTINATION;
use mig_report::{DEFAULT_OUTPUT_DIR, DEFAULT_VERIFY_COLUMN};

pub const DEFAULT_DATA_PATH: &str = "data/2018-2022-american-community-survey-MT.csv";
pub const DEFAULT_STATES_PATH: &str = "data/states.txt";
pub const DEFAULT_VERIFY_PATH: &str = "output/montana-migration.csv";

/// Console tables show this many rows unless told otherwise.
pub const DEFAULT_SUMMARY_ROWS: usize = 10;

#[derive(Parser)]
#[command(
    name = "mig",
    version,
    about = "Montana inbound migration analysis",
    long_about = "Aggregate, rank and cross-tabulate inbound migration by county.\n\n\
                  Reads American Community Survey county-to-county flows and a list of\n\
                  US states/territories, then writes CSV reports to an output directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Logging setup implied by the global flags.
    ///
    /// `--log-level` beats `-v`/`-q`; `RUST_LOG` is only consulted when
    /// neither is given.
    pub fn log_config(&self) -> LogConfig {
        let explicit = self.log_level.map(LevelFilter::from);
        let ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            level_filter: explicit.unwrap_or_else(|| self.verbosity.tracing_level_filter()),
            use_env_filter: explicit.is_none() && !self.verbosity.is_present(),
            with_ansi: ansi,
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
            ..LogConfig::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full analysis and write every report.
    Analyze(AnalyzeArgs),

    /// Re-sum a numeric column in a written report.
    Verify(VerifyArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Survey CSV with county, originState and inboundFromState columns.
    #[arg(long = "data", value_name = "PATH", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Reference list of US states/territories, one per line.
    #[arg(long = "states", value_name = "PATH", default_value = DEFAULT_STATES_PATH)]
    pub states: PathBuf,

    /// Directory that receives the reports.
    #[arg(long = "output-dir", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Origin name treated as the destination and dropped (case-insensitive).
    #[arg(long = "destination", value_name = "NAME", default_value = DEFAULT_DESTINATION)]
    pub destination: String,

    /// Cross tab as COUNTIESxORIGINS, e.g. 10x5. Repeat for several reports.
    #[arg(
        long = "cross-tab",
        value_name = "NxM",
        default_values_t = vec![DEFAULT_CROSS_TAB]
    )]
    pub cross_tabs: Vec<CrossTabSpec>,

    /// Counties in the grand total report.
    #[arg(long = "top-totals", value_name = "N", default_value_t = DEFAULT_TOP_TOTALS)]
    pub top_totals: usize,

    /// Rows shown in each console summary table.
    #[arg(long = "summary-rows", value_name = "N", default_value_t = DEFAULT_SUMMARY_ROWS)]
    pub summary_rows: usize,
}

#[derive(Parser)]
pub struct VerifyArgs {
    /// Report to re-read.
    #[arg(value_name = "CSV", default_value = DEFAULT_VERIFY_PATH)]
    pub path: PathBuf,

    /// Column to sum.
    #[arg(long = "column", value_name = "NAME", default_value = DEFAULT_VERIFY_COLUMN)]
    pub column: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
