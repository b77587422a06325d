//! Command-line arguments

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::build::BuildArgs;
use crate::cli::commands::check::CheckArgs;
use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::new::NewArgs;
use crate::cli::commands::probe::ProbeArgs;
use crate::cli::commands::show::ShowArgs;
use crate::core::frame::ConsistencyRule;

/// Photo frame toolkit - validate frame dimensions before building
#[derive(Parser, Debug)]
#[command(name = "pft", version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Output format
    #[arg(
        long = "format",
        short = 'f',
        global = true,
        env = "PFT_FORMAT",
        default_value = "auto"
    )]
    pub output: OutputFormat,

    /// Extra config file, layered over the user and project config
    #[arg(long, global = true, env = "PFT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Consistency rule for inner width and inner length
    #[arg(long, global = true, env = "PFT_RULE")]
    pub rule: Option<RuleArg>,

    /// More log output (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new frame document from the configured defaults
    New(NewArgs),

    /// Show a frame's parameters, derived sizes and validity
    Show(ShowArgs),

    /// Check frame documents and fail if any is invalid
    Check(CheckArgs),

    /// Try one assignment and report the outcome
    Probe(ProbeArgs),

    /// Write the build sheet of a valid frame
    Build(BuildArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table for humans
    #[default]
    Auto,
    Yaml,
    Json,
    /// Tab-separated values
    Tsv,
}

/// Consistency rule as given on the command line
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RuleArg {
    /// Inner sizes must be positive and smaller than the outer size
    Strict,
    /// Inner sizes may be zero
    Inclusive,
}

impl From<RuleArg> for ConsistencyRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::Strict => ConsistencyRule::Strict,
            RuleArg::Inclusive => ConsistencyRule::Inclusive,
        }
    }
}
