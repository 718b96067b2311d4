//! CLI argument definitions for `dqprof`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use dq_core::OutputFormat;

#[derive(Parser)]
#[command(
    name = "dqprof",
    version,
    about = "Per-column data-quality profiling of CSV files",
    long_about = "Profile CSV datasets column by column.\n\n\
                  Reports completeness, uniqueness, length and value bounds,\n\
                  format signatures and sample values for every column."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

/// Profiling options. Flags override values from `--config`.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// TOML configuration file.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Field delimiter of the input files.
    #[arg(long = "delimiter", global = true)]
    pub delimiter: Option<char>,

    /// Fail on rows with fewer fields than the header instead of padding them.
    #[arg(long = "reject-ragged", global = true)]
    pub reject_ragged: bool,

    /// Seed for Format and Sample Value sampling.
    #[arg(long = "seed", global = true)]
    pub seed: Option<u64>,

    /// Worker threads for column profiling (1 profiles sequentially).
    #[arg(long = "jobs", short = 'j', global = true)]
    pub jobs: Option<usize>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Profile CSV files and write a report beside each one.
    Profile(ProfileArgs),

    /// Profile one CSV file and print the report without writing it.
    Show(ShowArgs),

    /// Manage the dataset repository.
    Repo(RepoArgs),
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// CSV files to profile.
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Report path (single input only; default: <STEM>_output.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the report as JSON instead of CSV.
    #[arg(long = "json")]
    pub json: bool,
}

impl ProfileArgs {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Csv
        }
    }
}

#[derive(Parser)]
pub struct ShowArgs {
    /// CSV file to profile.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct RepoArgs {
    /// Repository root directory (default: `[repository] root` from the config).
    #[arg(long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: RepoCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RepoCommand {
    /// List every folder in the repository.
    Folders,
    /// Print the folder and dataset tree as JSON.
    Tree,
    /// Store a CSV file in a folder and profile it.
    Save {
        /// Target folder, relative to the root.
        #[arg(value_name = "FOLDER")]
        folder: String,
        /// CSV file to upload.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Print a stored dataset as JSON records.
    Input {
        /// Dataset path without `.csv` (for example `sales/profile_q1`).
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// Print the report of a stored dataset as JSON records.
    ProfileData {
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// Delete a stored dataset and its report.
    Delete {
        #[arg(value_name = "PATH")]
        path: String,
    },
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
