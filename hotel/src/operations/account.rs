//! Account creation and login.

use rusqlite::{params, OptionalExtension};

use crate::database::Database;
use crate::error::{Error, Result};
use crate::model::{UserId, UserType};
use crate::session::{Identity, Session};

/// Creates a customer account and returns its generated id.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for an empty name or password, or a
/// store error.
///
/// # Examples
///
/// ```no_run
/// use hotel::database::{Database, DatabaseConfig};
/// use hotel::operations::create_user;
///
/// let db = Database::open(DatabaseConfig::new("/tmp/hotels.db")).unwrap();
/// let id = create_user(&db, "Ana", "secret").unwrap();
/// println!("your user ID is {id}");
/// ```
pub fn create_user(db: &Database, name: &str, password: &str) -> Result<UserId> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::invalid_input("name", "must not be empty"));
    }
    if password.is_empty() {
        return Err(Error::invalid_input("password", "must not be empty"));
    }

    let user_id: UserId = db.connection().query_row(
        "INSERT INTO Users (name, password, userType) VALUES (?1, ?2, ?3) RETURNING userID",
        params![name, password, UserType::Customer.as_str()],
        |row| row.get(0),
    )?;

    log::info!("created customer account {user_id}");
    Ok(user_id)
}

/// Checks the credentials and, on success, authenticates `session`.
///
/// A user id that is not a number, or a wrong password, leaves the session
/// anonymous and returns `Ok(None)`.
///
/// # Errors
///
/// Returns a store error if the lookup fails.
pub fn log_in(
    db: &Database,
    session: &mut Session,
    user_id: &str,
    password: &str,
) -> Result<Option<Identity>> {
    let Ok(user_id) = user_id.parse::<UserId>() else {
        log::debug!("login rejected: non-numeric user id");
        return Ok(None);
    };

    let name: Option<String> = db
        .connection()
        .query_row(
            "SELECT name FROM Users WHERE userID = ?1 AND password = ?2",
            params![user_id, password],
            |row| row.get(0),
        )
        .optional()?;

    match name {
        Some(name) => {
            let identity = Identity { user_id, name };
            session.authenticate(identity.clone());
            Ok(Some(identity))
        }
        None => {
            log::debug!("login rejected for user {user_id}");
            Ok(None)
        }
    }
}
