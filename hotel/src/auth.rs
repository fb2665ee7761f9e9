//! Authorization for hotel-scoped management actions.
//!
//! The acting user's type is read from the store on every check, so a
//! demotion takes effect on the next action without a new login.

use std::fmt;

use rusqlite::{params, OptionalExtension};

use crate::database::Database;
use crate::error::{Error, Result};
use crate::model::{HotelId, UserId, UserType};
use crate::session::Session;

/// Why an identity was refused access to a hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDenial {
    /// The user is a customer or unknown, so no hotel is accessible.
    NotStaff,
    /// The user manages hotels, but not this one.
    NotHotelManager {
        /// The hotel that was requested.
        hotel_id: HotelId,
    },
}

impl fmt::Display for AccessDenial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStaff => {
                f.write_str("you are not authorized to access this hotel's information")
            }
            Self::NotHotelManager { hotel_id } => write!(
                f,
                "you are not authorized to access hotels outside of your management (hotel {hotel_id})"
            ),
        }
    }
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The action may proceed.
    Granted,
    /// The action is refused.
    Denied(AccessDenial),
}

impl AccessDecision {
    /// Returns true if access was granted.
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Reads the user type of `user_id`, or `None` if the user does not exist.
///
/// # Errors
///
/// Returns an error if the query fails or the stored type is unrecognized.
pub fn user_type(db: &Database, user_id: UserId) -> Result<Option<UserType>> {
    let stored: Option<String> = db
        .connection()
        .query_row(
            "SELECT userType FROM Users WHERE userID = ?1",
            params![user_id],
            |row| row.get(0),
        )
        .optional()?;
    stored.map(|s| s.parse()).transpose()
}

/// Decides whether `user_id` may act on `hotel_id`.
///
/// Admins may act on every hotel, customers on none, and managers on the
/// hotels whose `managerUserID` they are.
///
/// # Errors
///
/// Returns an error only if the store cannot be queried.
pub fn check_hotel_access(db: &Database, user_id: UserId, hotel_id: HotelId) -> Result<AccessDecision> {
    let decision = match user_type(db, user_id)? {
        Some(UserType::Admin) => AccessDecision::Granted,
        Some(UserType::Customer) | None => AccessDecision::Denied(AccessDenial::NotStaff),
        Some(UserType::Manager) => {
            let manages = db.query_count(
                "SELECT 1 FROM Hotel WHERE managerUserID = ?1 AND hotelID = ?2",
                params![user_id, hotel_id],
            )? > 0;
            if manages {
                AccessDecision::Granted
            } else {
                AccessDecision::Denied(AccessDenial::NotHotelManager { hotel_id })
            }
        }
    };

    log::debug!("access check user={user_id} hotel={hotel_id}: {decision:?}");
    Ok(decision)
}

/// Requires the session identity to have access to `hotel_id`.
///
/// # Errors
///
/// Returns [`Error::NotLoggedIn`] for an anonymous session and
/// [`Error::Unauthorized`] when access is denied.
pub fn require_hotel_access(db: &Database, session: &Session, hotel_id: HotelId) -> Result<UserId> {
    let identity = session.require_identity()?;
    match check_hotel_access(db, identity.user_id, hotel_id)? {
        AccessDecision::Granted => Ok(identity.user_id),
        AccessDecision::Denied(denial) => {
            log::warn!("user {} denied access to hotel {hotel_id}", identity.user_id);
            Err(Error::Unauthorized { denial })
        }
    }
}
