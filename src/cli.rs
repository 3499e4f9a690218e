//! CLI argument definitions for the enrollment projector.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "ctenroll",
    version,
    about = "Project clinical trial enrollment month by month",
    long_about = "Project site activation, screening and enrollment month by month until the \
                  enrollment target is reached.\n\n\
                  Inputs come from flags or from a JSON request file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Project enrollment and print the monthly table and headline figures.
    Project(ProjectArgs),
}

#[derive(Parser)]
pub struct ProjectArgs {
    /// Read inputs from a JSON projection request instead of flags.
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// First subject dosed date (YYYY-MM-DD, default: today).
    #[arg(long = "first-subject-dosed", value_name = "DATE")]
    pub first_subject_dosed: Option<String>,

    /// Number of enrolled subjects to reach.
    #[arg(long = "target", default_value_t = 100, allow_negative_numbers = true)]
    pub target: i64,

    /// Number of sites to activate.
    #[arg(long = "sites", default_value_t = 350, allow_negative_numbers = true)]
    pub sites: i64,

    /// Months over which sites ramp up to the full count.
    #[arg(
        long = "activation-months",
        default_value_t = 8,
        allow_negative_numbers = true
    )]
    pub activation_months: i64,

    /// Patients screened per active site per month.
    #[arg(
        long = "screening-rate",
        default_value_t = 0.44,
        allow_negative_numbers = true
    )]
    pub screening_rate: f64,

    /// Percentage of screened patients who fail screening (0-100).
    #[arg(
        long = "screen-failure-percent",
        default_value_t = 38.0,
        allow_negative_numbers = true
    )]
    pub screen_failure_percent: f64,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputFormatArg,

    /// Show every month instead of the first 10 and last 5.
    #[arg(long = "expand")]
    pub expand: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
