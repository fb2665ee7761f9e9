//! Create user and log in.

use std::io::{BufRead, Write};

use hotel::operations;

use crate::error::CliError;
use crate::menu::Context;
use crate::prompt::Prompter;

/// Registers a new customer account.
pub fn create_user<R: BufRead, W: Write>(ctx: &mut Context, p: &mut Prompter<R, W>) -> Result<(), CliError> {
    let name = p.line("\tEnter name: ")?;
    let password = p.line("\tEnter password: ")?;

    let user_id = operations::create_user(&ctx.db, &name, &password)?;
    p.say(&format!("User successfully created with userID = {user_id}"))
}

/// Checks credentials and starts the account session.
pub fn log_in<R: BufRead, W: Write>(ctx: &mut Context, p: &mut Prompter<R, W>) -> Result<(), CliError> {
    let user_id = p.line("\tEnter userID: ")?;
    let password = p.line("\tEnter password: ")?;

    match operations::log_in(&ctx.db, &mut ctx.session, user_id.trim(), &password)? {
        Some(identity) => p.say(&format!("Welcome, {}!", identity.name)),
        None => p.say("Invalid USER ID or password. Please try again."),
    }
}
