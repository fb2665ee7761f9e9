//! Failures of the console client and the process exit status each one maps to.

use std::fmt;
use std::path::PathBuf;

use hotel::Error as LibError;

#[derive(Debug)]
pub enum CliError {
    /// A failure reported by the booking library.
    Library(LibError),

    /// Connection parameters that cannot be used.
    InvalidArguments(String),

    /// The terminal could not be read or written.
    Io(std::io::Error),

    /// Another client held the store lock for longer than the busy timeout.
    Timeout,

    /// The store file is missing and may not be created.
    NoDatabase(PathBuf),

    /// `config.yaml` or an environment override was rejected.
    Config(String),

    /// Standard input was closed.
    EndOfInput,
}

impl CliError {
    /// Process exit status.
    ///
    /// | status | cause |
    /// |--------|-------|
    /// | 0 | end of input (a normal quit) |
    /// | 2 | store lock timeout |
    /// | 3 | store missing with auto-init off |
    /// | 4 | bad connection parameters or import source |
    /// | 5 | terminal I/O |
    /// | 6 | any other library failure |
    /// | 7 | configuration |
    ///
    /// Status 2 is shared with clap's usage errors; both mean the run never
    /// reached a usable menu.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EndOfInput => 0,
            Self::Timeout => 2,
            Self::NoDatabase(_) => 3,
            Self::InvalidArguments(_) => 4,
            Self::Io(_) => 5,
            Self::Library(_) => 6,
            Self::Config(_) => 7,
        }
    }

    /// Whether the menu loop can carry on after this error.
    ///
    /// Input, authorization and lookup failures are routine, and a store
    /// failure only aborts the workflow that hit it. Terminal I/O failures
    /// and end of input stop the client.
    pub fn is_workflow_failure(&self) -> bool {
        matches!(self, Self::Library(_) | Self::Timeout)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Library(e) => e.fmt(f),
            Self::InvalidArguments(msg) => write!(f, "invalid connection parameters: {msg}"),
            Self::Io(e) => write!(f, "terminal error: {e}"),
            Self::Timeout => f.write_str("the database stayed locked by another client"),
            Self::NoDatabase(path) => write!(
                f,
                "database {} does not exist and auto-init is disabled",
                path.display()
            ),
            Self::Config(msg) => write!(f, "bad configuration: {msg}"),
            Self::EndOfInput => f.write_str("input closed"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Library(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        if e.is_lock_timeout() {
            return Self::Timeout;
        }
        match e {
            LibError::DatabaseNotFound { path } => Self::NoDatabase(path),
            LibError::Configuration(_) => Self::Config(e.to_string()),
            LibError::Io(io) => Self::Io(io),
            other => Self::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
