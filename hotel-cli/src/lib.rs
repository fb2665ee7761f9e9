//! Library exports for hotel-cli.
//!
//! The binary is a thin wrapper around these modules; keeping them in a
//! library lets the menu tests drive whole sessions from scripted input.

pub mod actions;
pub mod cli;
pub mod error;
pub mod menu;
pub mod output;
pub mod prompt;
pub mod utils;

pub use cli::Cli;
