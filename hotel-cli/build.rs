//! Build script for hotel-cli.
//!
//! This script generates the `hotel.1` man page at build time using
//! clap_mangen and places it in OUT_DIR.
//!
//! Note: build scripts cannot depend on the crate being built, so the
//! command structure is described again here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("hotel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse hotels, book rooms and manage repairs")
        .long_about(
            "Interactive console client for hotel customers and managers. After login, \
             customers search hotels, view free rooms and book them; managers update \
             room information, read booking and update reports and schedule repairs.",
        )
        .arg(
            Arg::new("dbname")
                .help("Database name (the file <data-dir>/<dbname>.db)")
                .required(true),
        )
        .arg(
            Arg::new("port")
                .help("Database port (1-65535)")
                .required(true),
        )
        .arg(Arg::new("user").help("Database user").required(true))
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .env("HOTEL_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .env("HOTEL_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .action(ArgAction::SetTrue)
                .env("HOTEL_DISABLE_AUTOINIT"),
        )
        .arg(
            Arg::new("import")
                .long("import")
                .help("Load reference data from CSV files in DIR before showing the menu")
                .value_name("DIR"),
        )
}

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("hotel.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    Ok(())
}
