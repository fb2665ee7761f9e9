//! The single store connection of a client run.

use rusqlite::{Connection, OpenFlags, Transaction, TransactionBehavior};

use crate::error::{Error, Result};

use super::config::DatabaseConfig;

/// An open store.
///
/// The connection is opened once at startup and closed when the value is
/// dropped. Every connection has `calculate_distance` registered and
/// foreign keys enforced.
///
/// # Examples
///
/// ```no_run
/// use hotel::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/hotels.db");
/// let db = Database::open(config).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Opens the store, creating and initializing it when allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DatabaseNotFound`] for a missing file when
    /// `auto_create` is off, [`Error::UnsupportedSchemaVersion`] for a file
    /// written by an incompatible version, or a store error.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if !config.path.exists() {
            if !config.auto_create {
                return Err(Error::DatabaseNotFound {
                    path: config.path.clone(),
                });
            }
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        log::debug!("opening database {}", config.path.display());
        let mut conn = Connection::open_with_flags(&config.path, flags)?;

        // journal_mode answers with a row
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL; PRAGMA foreign_keys = ON")?;
        conn.busy_timeout(config.busy_timeout)?;

        super::functions::register_functions(&conn)?;
        super::migrations::check_schema_compatibility(&mut conn)?;

        Ok(Self { conn, config })
    }

    /// Returns the configuration the connection was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Begins an `IMMEDIATE` transaction.
    ///
    /// The write lock is taken up front, so a concurrent writer waits for
    /// the busy timeout instead of failing midway through.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock cannot be acquired within the busy
    /// timeout.
    pub fn begin_transaction(&mut self) -> Result<Transaction<'_>> {
        Ok(self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?)
    }

    /// Closes the connection, reporting any error from `SQLite`.
    ///
    /// # Errors
    ///
    /// Returns an error if `SQLite` fails to close the connection cleanly.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| Error::Database(err))
    }
}
