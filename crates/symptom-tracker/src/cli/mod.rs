//! Command-line interface for symptom-tracker.
//!
//! This module provides the CLI structure for the `symtrack` binary.

mod commands;
mod prompt;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ChartCommand, ConfigCommand, ListCommand, OutputFormat, StatusCommand,
};
pub use prompt::{prompt_entry, PromptOutcome};

use crate::logging::Verbosity;

/// symtrack - Keep a daily log of symptom severity
///
/// Records a date and a severity level (1-10) per entry, keeps the history in
/// a local store, and shows it as a list and a line chart.
#[derive(Debug, Parser)]
#[command(name = "symtrack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a symptom level for a date
    Add(AddCommand),

    /// Show the recorded history as a list
    List(ListCommand),

    /// Show the severity trend as a line chart
    Chart(ChartCommand),

    /// Show the full tracker page (history and chart)
    Show,

    /// Show storage location and history summary
    Status(StatusCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                2 => Verbosity::Debug,
                _ => Verbosity::Trace,
            }
        }
    }
}
