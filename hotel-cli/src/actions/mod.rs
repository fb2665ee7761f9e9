//! Workflows behind the menu entries.
//!
//! Each action prompts for its inputs, calls into `hotel::operations` and
//! prints the outcome. Library errors propagate with `?` so the menu decides
//! whether the client can carry on.

pub mod account;
pub mod browse;
pub mod manage;
pub mod repairs;
