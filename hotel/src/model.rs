//! Domain types shared by every workflow.
//!
//! Identifiers are thin newtypes over the integer keys used in the store so
//! a hotel id can never be passed where a room number is expected. All of
//! them bind directly as `rusqlite` parameters.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw key value.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw key value.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|_| Error::invalid_input($label, format!("'{}' is not a number", s.trim())))
            }
        }

        impl ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.0))
            }
        }

        impl FromSql for $name {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                i64::column_result(value).map(Self)
            }
        }
    };
}

id_type!(
    /// Key of a row in `Users`.
    UserId,
    "user ID"
);
id_type!(
    /// Key of a row in `Hotel`.
    HotelId,
    "hotel ID"
);
id_type!(
    /// Room number, unique within one hotel.
    RoomNumber,
    "room number"
);
id_type!(
    /// Key of a row in `MaintenanceCompany`.
    CompanyId,
    "company ID"
);
id_type!(
    /// Store-generated key of a row in `RoomBookings`.
    BookingId,
    "booking ID"
);
id_type!(
    /// Store-generated key of a row in `RoomRepairs`.
    RepairId,
    "repair ID"
);

/// The kind of account a user holds.
///
/// Parsing is case-insensitive, so `Customer` and `customer` name the same
/// type. The canonical stored form is lowercase.
///
/// # Examples
///
/// ```
/// use hotel::UserType;
///
/// assert_eq!("Manager".parse::<UserType>().unwrap(), UserType::Manager);
/// assert_eq!(UserType::Customer.as_str(), "customer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserType {
    /// Authorized for every hotel-scoped action.
    Admin,
    /// Authorized for the hotels they manage.
    Manager,
    /// Never authorized for hotel-scoped actions.
    Customer,
}

impl UserType {
    /// Returns the canonical lowercase name stored in `Users.userType`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Customer => "customer",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "customer" => Ok(Self::Customer),
            other => Err(Error::Validation {
                field: "userType".into(),
                message: format!("unknown user type '{other}'"),
            }),
        }
    }
}

/// A calendar date in ISO `YYYY-MM-DD` form.
///
/// Booking, repair and report dates are all stored as ISO text, which keeps
/// lexical and chronological order identical in the store.
///
/// # Examples
///
/// ```
/// use hotel::IsoDate;
///
/// let date: IsoDate = "2024-06-01".parse().unwrap();
/// assert_eq!(date.to_string(), "2024-06-01");
/// assert!("06/01/2024".parse::<IsoDate>().is_err());
/// assert!("2024-02-30".parse::<IsoDate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate(NaiveDate);

impl IsoDate {
    /// Storage and display format.
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// Wraps a `chrono` date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying `chrono` date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for IsoDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        // chrono accepts unpadded fields; the store needs the fixed-width form
        if trimmed.len() != 10 {
            return Err(Error::invalid_input(
                "date",
                format!("'{trimmed}' is not in YYYY-MM-DD form"),
            ));
        }
        NaiveDate::parse_from_str(trimmed, Self::FORMAT)
            .map(Self)
            .map_err(|e| Error::invalid_input("date", format!("'{trimmed}': {e}")))
    }
}

impl ToSql for IsoDate {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for IsoDate {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        text.parse()
            .map_err(|e: Error| FromSqlError::Other(Box::new(e)))
    }
}

/// A room price in whole currency units.
///
/// # Examples
///
/// ```
/// use hotel::Price;
///
/// let price: Price = "175".parse().unwrap();
/// assert_eq!(price.value(), 175);
/// assert!("-1".parse::<Price>().is_err());
/// assert!("12.50".parse::<Price>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Creates a price, rejecting negative amounts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `value` is negative.
    pub fn new(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(Error::invalid_input("price", "must not be negative"));
        }
        Ok(Self(value))
    }

    /// Returns the amount.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::invalid_input("price", format!("'{}' is not a whole number", s.trim())))?;
        Self::new(value)
    }
}

impl ToSql for Price {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0))
    }
}

impl FromSql for Price {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Self)
    }
}

/// A room as stored in `Rooms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// The hotel the room belongs to.
    pub hotel_id: HotelId,
    /// The room number within the hotel.
    pub room_number: RoomNumber,
    /// Nightly price.
    pub price: Price,
    /// Link to a picture of the room, if any.
    pub image_url: Option<String>,
}

/// Format of `RoomUpdatesLog.updatedOn`.
///
/// Fixed width with microseconds, so lexical order is chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Returns the current local time in [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parse_trims_whitespace() {
        let id: HotelId = " 5 ".parse().unwrap();
        assert_eq!(id, HotelId::new(5));
        assert_eq!(id.to_string(), "5");
    }

    #[test]
    fn test_id_parse_rejects_text() {
        let err = "five".parse::<RoomNumber>().unwrap_err();
        let display = err.to_string();
        assert!(display.contains("room number"));
        assert!(display.contains("five"));
    }

    #[test]
    fn test_user_type_case_insensitive() {
        assert_eq!("ADMIN".parse::<UserType>().unwrap(), UserType::Admin);
        assert_eq!(" customer ".parse::<UserType>().unwrap(), UserType::Customer);
        assert!("guest".parse::<UserType>().is_err());
    }

    #[test]
    fn test_iso_date_requires_padding() {
        assert!("2024-6-1".parse::<IsoDate>().is_err());
        assert!("2024-06-01".parse::<IsoDate>().is_ok());
    }

    #[test]
    fn test_iso_date_ordering_matches_calendar() {
        let early: IsoDate = "2024-01-31".parse().unwrap();
        let late: IsoDate = "2024-02-01".parse().unwrap();
        assert!(early < late);
    }

    #[test]
    fn test_price_zero_allowed() {
        assert_eq!("0".parse::<Price>().unwrap().value(), 0);
    }

    #[test]
    fn test_timestamp_is_fixed_width() {
        let ts = timestamp_now();
        assert_eq!(ts.len(), "2024-06-01 12:00:00.000000".len());
    }
}
