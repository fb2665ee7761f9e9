//! Error types for the hotel library.
//!
//! This module provides the error hierarchy for every workflow in the
//! library, using `thiserror` for ergonomic error handling. Errors fall in
//! two groups: recoverable ones (bad input, denied access, missing rows,
//! booking conflicts) that send the user back to the menu, and store or
//! environment failures.

use std::path::PathBuf;

use rusqlite::ErrorCode;
use thiserror::Error;

use crate::auth::AccessDenial;
use crate::model::{HotelId, IsoDate, RoomNumber};

/// Result type alias for operations that may fail with a hotel error.
///
/// # Examples
///
/// ```
/// use hotel::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(101)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the hotel library.
#[derive(Debug, Error)]
pub enum Error {
    /// A value entered at the terminal could not be used.
    #[error("invalid {field}: {message}")]
    InvalidInput {
        /// The input that was rejected.
        field: String,
        /// Why the input was rejected.
        message: String,
    },

    /// A workflow that needs an identity ran with an anonymous session.
    #[error("no user is logged in")]
    NotLoggedIn,

    /// The session identity may not act on the requested hotel.
    #[error("{denial}")]
    Unauthorized {
        /// Which authorization rule denied the action.
        denial: AccessDenial,
    },

    /// A referenced hotel, room or company does not exist.
    #[error("not found: {resource}")]
    NotFound {
        /// Description of the missing resource.
        resource: String,
    },

    /// The room is already booked on the requested date.
    #[error("room {room_number} of hotel {hotel_id} is already booked on {date}")]
    BookingConflict {
        /// The hotel of the contested room.
        hotel_id: HotelId,
        /// The contested room.
        room_number: RoomNumber,
        /// The contested date.
        date: IsoDate,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A CSV data file could not be read.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration or data validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The database file does not exist and auto-initialization is disabled.
    #[error("database not found: {}", path.display())]
    DatabaseNotFound {
        /// The expected path to the database file.
        path: PathBuf,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl Error {
    /// Builds an [`Error::InvalidInput`] for the named field.
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Builds an [`Error::NotFound`] for the described resource.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Check if the error is user-correctable.
    ///
    /// Recoverable errors abort the current workflow and return the user to
    /// the menu. Everything else is a store or environment fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotel::Error;
    ///
    /// assert!(Error::NotLoggedIn.is_recoverable());
    /// assert!(!Error::Validation {
    ///     field: "column_width".into(),
    ///     message: "out of range".into(),
    /// }
    /// .is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. }
                | Self::NotLoggedIn
                | Self::Unauthorized { .. }
                | Self::NotFound { .. }
                | Self::BookingConflict { .. }
        )
    }

    /// Check if the error means the database stayed locked past the busy timeout.
    #[must_use]
    pub fn is_lock_timeout(&self) -> bool {
        matches!(
            self,
            Self::Database(rusqlite::Error::SqliteFailure(err, _))
                if matches!(err.code, ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked)
        )
    }
}
