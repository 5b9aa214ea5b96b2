use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "pdf-check")]
#[command(author, version, about = "Check PDF documents against compliance rules")]
#[command(long_about = "A client for a remote PDF compliance analysis service.\n\n\
    Exit codes:\n  \
    0 - Document checked, all rules passed\n  \
    1 - Document checked, one or more rules did not pass\n  \
    2 - Validation, configuration or transport error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Base URL of the analysis service (overrides env and config file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a PDF and rules for checking, print the report
    Check(CheckArgs),

    /// Probe the analysis service health endpoint
    Health,

    /// Edit the document and rules interactively, submitting on demand
    Interactive,

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the PDF document
    pub file: PathBuf,

    /// Compliance rule to check (repeat for multiple rules, max 10)
    #[arg(short, long = "rule")]
    pub rules: Vec<String>,

    /// Read rules from a file, one per line (combined with --rule, in order)
    #[arg(long)]
    pub rules_file: Option<PathBuf>,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exit successfully even when rules did not pass
    #[arg(long)]
    pub warn_only: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".pdf-check.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
