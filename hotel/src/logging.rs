//! Operator-channel logging.
//!
//! Library code logs through the `log` facade. This module provides the
//! backend: a stderr logger with three verbosity settings, selected from the
//! command line or `HOTEL_LOG_MODE`. Nothing here writes to stdout, which
//! belongs to the menus.

use std::env;
use std::fmt;
use std::str::FromStr;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Environment variable selecting the verbosity.
pub const ENV_LOG_MODE: &str = "HOTEL_LOG_MODE";

/// How much the operator channel prints.
///
/// ```
/// use hotel::Verbosity;
///
/// assert!(Verbosity::Quiet < Verbosity::Normal);
/// assert!(Verbosity::Normal < Verbosity::Verbose);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Nothing at all.
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Everything down to debug records.
    Verbose,
}

impl Verbosity {
    const ALL: [Self; 3] = [Self::Quiet, Self::Normal, Self::Verbose];

    /// The name accepted by `HOTEL_LOG_MODE`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        }
    }

    /// The most detailed `log` level let through.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }

    /// Resolves the verbosity from the two command-line switches, falling
    /// back to `HOTEL_LOG_MODE`. `--verbose` wins over `--quiet`; an
    /// unreadable environment value is ignored.
    #[must_use]
    pub fn resolve(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (true, _) => Self::Verbose,
            (false, true) => Self::Quiet,
            (false, false) => env::var(ENV_LOG_MODE)
                .ok()
                .and_then(|mode| mode.parse().ok())
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verbosity {
    type Err = String;

    /// Case-insensitive; surrounding whitespace is ignored.
    ///
    /// ```
    /// use hotel::Verbosity;
    ///
    /// assert_eq!(" Verbose ".parse::<Verbosity>(), Ok(Verbosity::Verbose));
    /// assert!("chatty".parse::<Verbosity>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown log mode '{wanted}' (expected quiet, normal or verbose)"))
    }
}

/// Writes records to stderr as `LEVEL: message`.
///
/// ```
/// use hotel::{Logger, Verbosity};
/// use log::Level;
///
/// let logger = Logger::new(Verbosity::Normal);
/// assert!(logger.prints(Level::Warn));
/// assert!(!logger.prints(Level::Info));
/// ```
#[derive(Debug, Default)]
pub struct Logger {
    verbosity: Verbosity,
}

impl Logger {
    /// A logger printing at `verbosity`.
    #[must_use]
    pub const fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// The verbosity this logger prints at.
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Whether a record at `level` reaches stderr.
    #[must_use]
    pub fn prints(&self, level: Level) -> bool {
        level <= self.verbosity.filter()
    }

    /// Makes this the process-wide `log` backend. A second call leaves the
    /// first logger in place.
    pub fn install(self) {
        let max = self.verbosity.filter();
        if log::set_boxed_logger(Box::new(self)).is_ok() {
            log::set_max_level(max);
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.prints(metadata.level())
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = match record.level() {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug | Level::Trace => "DEBUG",
        };
        eprintln!("{tag}: {}", record.args());
    }

    fn flush(&self) {}
}

/// Resolves the verbosity (see [`Verbosity::resolve`]), installs the stderr
/// logger and returns the verbosity now in force.
pub fn init_logger(verbose: bool, quiet: bool) -> Verbosity {
    let verbosity = Verbosity::resolve(verbose, quiet);
    Logger::new(verbosity).install();
    verbosity
}
