//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Clock-in/clock-out timecard.
///
/// Tracks one subject's work and break intervals in a plain-text timecard
/// file and derives minute totals and a projected end-of-day time.
#[derive(Debug, Parser)]
#[command(name = "timecard", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Clock in, starting a new work interval.
    In {
        /// Clock-in time: "HH:MM" (today) or "YYYY-MM-DD HH:MM", local.
        /// Defaults to now.
        #[arg(long)]
        at: Option<String>,
    },

    /// Clock out, closing the open work interval.
    Out {
        /// Clock-out time: "HH:MM" (today) or "YYYY-MM-DD HH:MM", local.
        /// Defaults to now.
        #[arg(long)]
        at: Option<String>,
    },

    /// Roll back the last clock event.
    Undo,

    /// Show the current clock state and today's totals.
    Status,

    /// Report entries and totals for one day.
    Report {
        /// The day to report on. Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Emit the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Remove entries older than a cutoff date.
    Clean {
        /// Oldest day of entries to keep. Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Remove all entries.
    Clear,
}
