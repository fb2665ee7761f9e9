//! Command-line arguments.
//!
//! This module defines the CLI structure using clap's derive macros: the
//! three connection parameters plus global options.

use clap::Parser;
use std::path::PathBuf;

/// Interactive console client for hotel bookings and room repairs.
#[derive(Parser, Debug)]
#[command(name = "hotel")]
#[command(version, about = "Browse hotels, book rooms and manage repairs", long_about = None)]
pub struct Cli {
    /// Database name (the file <data-dir>/<dbname>.db)
    pub dbname: String,

    /// Database port (1-65535)
    pub port: u16,

    /// Database user
    pub user: String,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", env = "HOTEL_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", env = "HOTEL_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization
    #[arg(long, env = "HOTEL_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    /// Load reference data from CSV files in DIR before showing the menu
    #[arg(long, value_name = "DIR")]
    pub import: Option<PathBuf>,
}
