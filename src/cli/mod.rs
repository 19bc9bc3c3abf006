//! CLI module - command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;

/// rboolean - Boolean search automation for technical recruitment
#[derive(Parser, Debug)]
#[command(name = "rboolean")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/rboolean/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Taxonomy YAML file or directory (default: built-in taxonomy)
    #[arg(long, global = true)]
    pub taxonomy: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the loaded role group taxonomy
    Taxonomy,
    /// Show Boolean search variants for a role group
    Show(commands::show::ShowArgs),
    /// Match a free-text job title to a role group
    #[command(name = "match")]
    Match(commands::match_title::MatchArgs),
    /// Rank role groups similar to a given one
    Similar(commands::similar::SimilarArgs),
    /// Build the pairwise similarity matrix
    Matrix(commands::matrix::MatrixArgs),
    /// Pool several role groups into one hybrid search
    Hybrid(commands::hybrid::HybridArgs),
    /// Process a JSON vacancy file into search exports
    Process(commands::process::ProcessArgs),
}
