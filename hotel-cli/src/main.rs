//! Main entry point for the hotel client.
//!
//! Connects to the database named on the command line, optionally loads CSV
//! reference data, and then hands the terminal to the interactive menus:
//! - the main menu: create a user, log in, exit
//! - the account menu: hotel search, bookings, room management and repairs

use std::io::{self, BufRead, Write};

use clap::Parser;
use hotel_cli::error::CliError;
use hotel_cli::menu::{self, Context};
use hotel_cli::prompt::Prompter;
use hotel_cli::utils::{load_configuration, open_database, GlobalOptions};
use hotel_cli::Cli;

const BANNER_RULE: &str = "*******************************************************";

fn main() {
    let cli = Cli::parse();
    let verbosity = hotel::init_logger(cli.verbose, cli.quiet);
    log::debug!("operator log mode: {verbosity}");

    let result = GlobalOptions::from_cli(cli).and_then(|global| run(&global));

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn run(global: &GlobalOptions) -> Result<(), CliError> {
    let config = load_configuration(global)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut p = Prompter::new(stdin.lock(), stdout.lock());

    write!(p.output(), "Connecting to database...")?;
    p.output().flush()?;
    let mut db = open_database(global, &config)?;
    p.say("Done")?;

    if let Some(dir) = &global.import {
        let summary = hotel::import_directory(&mut db, dir).map_err(|e| match e {
            hotel::Error::Validation { .. } | hotel::Error::Csv(_) => {
                CliError::InvalidArguments(format!("cannot import {}: {e}", dir.display()))
            }
            other => CliError::from(other),
        })?;
        p.say(&format!(
            "Imported {} rows from {} ({} users, {} hotels, {} rooms, {} companies, {} bookings)",
            summary.total(),
            dir.display(),
            summary.users,
            summary.hotels,
            summary.rooms,
            summary.companies,
            summary.bookings
        ))?;
    }

    greet(&mut p)?;
    let mut ctx = Context::new(db, config.column_width());
    let outcome = menu::run(&mut ctx, &mut p);

    write!(p.output(), "Disconnecting from database...")?;
    ctx.db.close()?;
    p.say("Done\n\nBye !")?;
    outcome
}

fn greet<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<(), CliError> {
    p.say(&format!("\n\n{BANNER_RULE}"))?;
    p.say("              User Interface")?;
    p.say(&format!("{BANNER_RULE}\n"))
}
