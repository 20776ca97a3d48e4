//! CLI argument definitions for roster.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use roster_model::SortKey;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Roster - browse and edit a small record table from the terminal",
    long_about = "Browse and edit a table of person records.\n\n\
                  Records are validated on blur and on submit, and the table\n\
                  supports search, single-column sort and pagination."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
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

    /// Allow record values (names, emails) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print one page of the record table.
    Show(ShowArgs),

    /// Replay a script of record and table commands.
    Run(RunArgs),

    /// List form fields with their validation rules and choices.
    Fields,
}

/// Options shared by every command that opens a session.
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Rows per page.
    #[arg(
        long = "page-size",
        value_name = "N",
        default_value_t = roster_core::DEFAULT_ITEMS_PER_PAGE,
        value_parser = parse_page_size
    )]
    pub page_size: usize,

    /// JSON file with an array of records to start from instead of the built-in seed.
    #[arg(long = "seed", value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Initial sort column (id, name, email, age, gender, status, date, isChecked).
    #[arg(long = "sort", value_name = "KEY")]
    pub sort: Option<SortKey>,

    /// Sort the initial column descending.
    #[arg(long = "desc", requires = "sort")]
    pub desc: bool,

    /// Initial search term.
    #[arg(long = "search", value_name = "TERM")]
    pub search: Option<String>,

    /// Initial page (1-based).
    #[arg(long = "page", value_name = "N")]
    pub page: Option<usize>,
}

#[derive(Parser)]
pub struct ShowArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Print the page as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Script file; read from stdin when omitted.
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    #[command(flatten)]
    pub session: SessionArgs,

    /// Print the outcome of every command.
    #[arg(long = "echo")]
    pub echo: bool,
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

fn parse_page_size(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".to_string()),
        Ok(size) => Ok(size),
        Err(error) => Err(error.to_string()),
    }
}
