//! Main and account menus.
//!
//! Both menus are dispatch tables of [`MenuEntry`] values: the table drives
//! the printed menu and the choice lookup alike. A workflow that fails with
//! a routine error is reported and the user lands back on the same menu;
//! end of input leaves every menu as if `9. < EXIT` had been chosen.

use std::io::{BufRead, Write};

use hotel::{Database, Session};

use crate::actions::{account, browse, manage, repairs};
use crate::error::CliError;
use crate::prompt::Prompter;

/// Menu key that leaves the main menu.
pub const EXIT_KEY: u32 = 9;

/// Menu key that ends the logged-in session.
pub const LOG_OUT_KEY: u32 = 20;

/// State shared by every workflow of one client run.
pub struct Context {
    /// The open store.
    pub db: Database,
    /// Who is logged in, if anyone.
    pub session: Session,
    /// Width each table cell is padded to.
    pub column_width: usize,
}

impl Context {
    /// Starts an anonymous session over `db`.
    pub fn new(db: Database, column_width: usize) -> Self {
        Self {
            db,
            session: Session::anonymous(),
            column_width,
        }
    }
}

/// A workflow reachable from a menu.
pub type Action<R, W> = fn(&mut Context, &mut Prompter<R, W>) -> Result<(), CliError>;

/// One numbered menu line.
pub struct MenuEntry<R, W> {
    /// Number the user types.
    pub key: u32,
    /// Text shown after the number.
    pub label: &'static str,
    /// Workflow run for this entry.
    pub action: Action<R, W>,
}

impl<R, W> MenuEntry<R, W> {
    const fn new(key: u32, label: &'static str, action: Action<R, W>) -> Self {
        Self { key, label, action }
    }
}

fn main_entries<R: BufRead, W: Write>() -> Vec<MenuEntry<R, W>> {
    vec![
        MenuEntry::new(1, "Create user", account::create_user),
        MenuEntry::new(2, "Log in", account::log_in),
    ]
}

fn account_entries<R: BufRead, W: Write>() -> Vec<MenuEntry<R, W>> {
    vec![
        MenuEntry::new(1, "View Hotels within 30 units", browse::hotels_near),
        MenuEntry::new(2, "View Rooms", browse::view_rooms),
        MenuEntry::new(3, "Book a Room", browse::book_room),
        MenuEntry::new(4, "View recent booking history", browse::recent_bookings),
        MenuEntry::new(5, "Update Room Information", manage::update_room),
        MenuEntry::new(6, "View 5 recent Room Updates Info", manage::recent_updates),
        MenuEntry::new(7, "View booking history of the hotel", manage::booking_history),
        MenuEntry::new(8, "View 5 regular Customers", manage::regular_customers),
        MenuEntry::new(9, "Place room repair Request to a company", repairs::place_request),
        MenuEntry::new(10, "View room repair Requests history", repairs::room_history),
        MenuEntry::new(11, "View All room repair Requests history", repairs::hotel_history),
    ]
}

/// Runs the main menu until the user exits or the input ends.
///
/// # Errors
///
/// Returns an error only for failures that stop the client, such as a
/// terminal that can no longer be written to.
pub fn run<R: BufRead, W: Write>(ctx: &mut Context, p: &mut Prompter<R, W>) -> Result<(), CliError> {
    match main_menu(ctx, p) {
        Err(CliError::EndOfInput) => {
            log::debug!("input closed, leaving the menu");
            ctx.session.end();
            Ok(())
        }
        other => other,
    }
}

fn main_menu<R: BufRead, W: Write>(ctx: &mut Context, p: &mut Prompter<R, W>) -> Result<(), CliError> {
    let entries = main_entries::<R, W>();
    loop {
        p.say("MAIN MENU")?;
        p.say("---------")?;
        print_entries(p, &entries)?;
        p.say(&format!("{EXIT_KEY}. < EXIT"))?;

        let choice = p.choice()?;
        if choice == EXIT_KEY {
            return Ok(());
        }
        match entries.iter().find(|e| e.key == choice) {
            Some(entry) => dispatch(ctx, p, entry)?,
            None => p.say("Unrecognized choice!")?,
        }

        if ctx.session.is_authenticated() {
            account_menu(ctx, p)?;
        }
    }
}

fn account_menu<R: BufRead, W: Write>(ctx: &mut Context, p: &mut Prompter<R, W>) -> Result<(), CliError> {
    let entries = account_entries::<R, W>();
    loop {
        p.say("MAIN MENU")?;
        p.say("---------")?;
        print_entries(p, &entries)?;
        p.say(".........................")?;
        p.say(&format!("{LOG_OUT_KEY}. Log out"))?;

        let choice = p.choice()?;
        if choice == LOG_OUT_KEY {
            ctx.session.end();
            return Ok(());
        }
        match entries.iter().find(|e| e.key == choice) {
            Some(entry) => dispatch(ctx, p, entry)?,
            None => p.say("Unrecognized choice!")?,
        }
    }
}

fn print_entries<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    entries: &[MenuEntry<R, W>],
) -> Result<(), CliError> {
    for entry in entries {
        p.say(&format!("{}. {}", entry.key, entry.label))?;
    }
    Ok(())
}

/// Runs one workflow, absorbing the failures the menu can carry on from.
fn dispatch<R: BufRead, W: Write>(
    ctx: &mut Context,
    p: &mut Prompter<R, W>,
    entry: &MenuEntry<R, W>,
) -> Result<(), CliError> {
    log::debug!("running menu entry {}: {}", entry.key, entry.label);
    match (entry.action)(ctx, p) {
        Err(err) if err.is_workflow_failure() => report(p, &err),
        other => other,
    }
}

fn report<R: BufRead, W: Write>(p: &mut Prompter<R, W>, err: &CliError) -> Result<(), CliError> {
    match err {
        CliError::Library(e) if e.is_recoverable() => p.say(&capitalize(&e.to_string())),
        _ => {
            log::error!("{err}");
            p.say(&format!("The request could not be completed: {err}"))
        }
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
