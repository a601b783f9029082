//! CLI argument parsing for gradebook
//!
//! Uses clap for argument parsing.
//! Supports global flags: --root, --store, --format, --quiet, --verbose

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gradebook_core::format::OutputFormat;

pub use args::{AddArgs, UpdateArgs};

/// Gradebook - grade & what-if tracker CLI
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving the store
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit store root path
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse::parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new gradebook store
    Init {
        /// Use visible store directory (gradebook/ instead of .gradebook/)
        #[arg(long)]
        visible: bool,

        /// Course title recorded in the store config
        #[arg(long)]
        course: Option<String>,
    },

    /// Add an assessment
    Add(AddArgs),

    /// List assessments, ordered by due date
    List,

    /// Show one assessment
    Show {
        /// Assessment id
        id: u64,
    },

    /// Update fields of an assessment
    Update(UpdateArgs),

    /// Remove an assessment (no error if the id is unknown)
    Remove {
        /// Assessment id
        id: u64,
    },

    /// Current weighted average and remaining weight
    Stats,

    /// Check that weights do not exceed 100%
    Validate,

    /// Average needed on remaining work to reach a target grade
    WhatIf {
        /// Target final percentage (0-100)
        target: f64,
    },
}
