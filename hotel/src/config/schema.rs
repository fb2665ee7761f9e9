//! Configuration schema definitions.
//!
//! Every field is optional so partial sources (the YAML file, the
//! environment, command-line flags) can be layered on top of each other.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default width, in characters, of one printed table cell.
pub const DEFAULT_COLUMN_WIDTH: usize = 15;

/// Widest table cell the printer accepts.
pub const MAX_COLUMN_WIDTH: usize = 80;

/// Default time to wait on a locked database, in seconds.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use hotel::config::Config;
///
/// let config = Config {
///     column_width: Some(20),
///     ..Default::default()
/// };
/// assert_eq!(config.column_width(), 20);
/// assert!(!config.autoinit_disabled());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum time to wait for a database lock (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Refuse to create a missing database file.
    pub disable_autoinit: Option<bool>,

    /// Width of each printed table cell.
    pub column_width: Option<usize>,
}

impl Config {
    /// Configuration with every built-in default filled in.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            maximum_lock_wait_seconds: Some(DEFAULT_LOCK_WAIT_SECONDS),
            disable_autoinit: Some(false),
            column_width: Some(DEFAULT_COLUMN_WIDTH),
        }
    }

    /// Effective lock wait as a [`Duration`].
    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// Effective table cell width.
    #[must_use]
    pub fn column_width(&self) -> usize {
        self.column_width.unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    /// Whether a missing database file is a fatal error.
    #[must_use]
    pub fn autoinit_disabled(&self) -> bool {
        self.disable_autoinit.unwrap_or(false)
    }
}
