//! Where the store lives and how it is opened.
//!
//! A database name from the command line maps to `<data-dir>/<name>.db`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::DEFAULT_LOCK_WAIT_SECONDS;
use crate::error::{Error, Result};

/// Settings for [`Database::open`](super::Database::open).
///
/// # Examples
///
/// ```
/// use hotel::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/hotels.db")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert!(config.auto_create);
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// The `.db` file.
    pub path: PathBuf,
    /// How long a statement waits for another client's lock.
    pub busy_timeout: Duration,
    /// Create and initialize a missing file instead of failing.
    pub auto_create: bool,
}

impl DatabaseConfig {
    /// Settings for `path` with a five second lock wait and auto-creation.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_secs(DEFAULT_LOCK_WAIT_SECONDS),
            auto_create: true,
        }
    }

    /// Overrides the lock wait.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Controls whether a missing database file is created.
    #[must_use]
    pub fn with_auto_create(mut self, auto_create: bool) -> Self {
        self.auto_create = auto_create;
        self
    }
}

/// Returns the default data directory, `~/.hotel`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".hotel"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })
}

/// Resolves a database name to its file inside the data directory.
///
/// The file is `<data_dir>/<dbname>.db`, with `data_dir` defaulting to
/// [`default_data_dir`]. The name must be a plain file stem.
///
/// # Errors
///
/// Returns an error if the name is empty or contains path separators, or if
/// no data directory is given and the home directory is unknown.
///
/// # Examples
///
/// ```
/// use hotel::database::resolve_database_path;
/// use std::path::{Path, PathBuf};
///
/// let path = resolve_database_path(Some(Path::new("/srv/hotel")), "bookings").unwrap();
/// assert_eq!(path, PathBuf::from("/srv/hotel/bookings.db"));
/// assert!(resolve_database_path(Some(Path::new("/srv")), "../etc").is_err());
/// ```
pub fn resolve_database_path(data_dir: Option<&Path>, dbname: &str) -> Result<PathBuf> {
    let name = dbname.trim();
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(Error::Validation {
            field: "dbname".into(),
            message: format!("'{dbname}' is not a valid database name"),
        });
    }

    let dir = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_data_dir()?,
    };
    Ok(dir.join(format!("{name}.db")))
}
