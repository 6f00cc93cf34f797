// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::default_plan_path;
use crate::snapshot::default_snapshot_path;

/// Command-line arguments for `studyplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "studyplan",
    version,
    about = "Plan study order from prerequisites, rank weak subjects, browse syllabi.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the plan file (TOML).
    ///
    /// Default: `StudyPlan.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_plan_path())]
    pub plan: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `STUDYPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the study path (prerequisites first).
    Path,

    /// Print the dependency graph as vertices and edges.
    Graph {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print subjects weakest first.
    Weak {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the syllabus tree of one subject.
    Syllabus {
        /// Subject whose syllabus to print.
        subject: String,

        /// Emit the nested tree as JSON instead of indented text.
        #[arg(long)]
        json: bool,
    },

    /// Print Completed / In Progress / Pending for each subject.
    Progress,

    /// Write study path, marks and progress to a text file.
    Save {
        /// Where to write the snapshot.
        #[arg(long, value_name = "PATH", default_value_os_t = default_snapshot_path())]
        output: PathBuf,
    },

    /// Validate the plan file and print a summary, without planning.
    Check,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
