//! Room information updates.

use rusqlite::params;

use crate::auth::require_hotel_access;
use crate::database::Database;
use crate::error::Result;
use crate::model::{timestamp_now, HotelId, Price, Room, RoomNumber};
use crate::session::Session;

use super::lookup::require_room;

/// Literal a user types to keep a field unchanged.
pub const SKIP: &str = "skip";

/// New values for a room; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomUpdate {
    /// Replacement price.
    pub price: Option<Price>,
    /// Replacement image URL.
    pub image_url: Option<String>,
}

impl RoomUpdate {
    /// Builds an update from raw terminal entries, honouring [`SKIP`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if the price is not a
    /// non-negative whole number.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotel::operations::RoomUpdate;
    ///
    /// let update = RoomUpdate::from_entries("175", "skip").unwrap();
    /// assert_eq!(update.price.unwrap().value(), 175);
    /// assert!(update.image_url.is_none());
    /// assert!(RoomUpdate::from_entries("cheap", "skip").is_err());
    /// ```
    pub fn from_entries(price: &str, image_url: &str) -> Result<Self> {
        let price = match price.trim() {
            p if p.eq_ignore_ascii_case(SKIP) => None,
            p => Some(p.parse::<Price>()?),
        };
        let image_url = match image_url.trim() {
            u if u.eq_ignore_ascii_case(SKIP) => None,
            u => Some(u.to_string()),
        };
        Ok(Self { price, image_url })
    }

    /// Returns true if the update changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.price.is_none() && self.image_url.is_none()
    }
}

/// Result of [`update_room_info`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomUpdateOutcome {
    /// Both fields were skipped; nothing was written.
    NothingToUpdate,
    /// The room was updated and the change logged.
    Updated {
        /// The room after the update.
        room: Room,
        /// The `updatedOn` value written to the log.
        updated_on: String,
    },
}

/// Shows a room to someone allowed to manage its hotel.
///
/// # Errors
///
/// Returns an authorization error, [`crate::Error::NotFound`] for an unknown
/// room, or a store error.
pub fn room_details(db: &Database, session: &Session, hotel_id: HotelId, room_number: RoomNumber) -> Result<Room> {
    require_hotel_access(db, session, hotel_id)?;
    require_room(db.connection(), hotel_id, room_number)
}

/// Applies `update` to a room and appends to `RoomUpdatesLog`.
///
/// The room is read under the write lock, so a skipped field keeps the value
/// current at commit time. The room write and the log entry commit together.
///
/// # Errors
///
/// Returns an authorization error, [`crate::Error::NotFound`] for an unknown
/// room, or a store error.
pub fn update_room_info(
    db: &mut Database,
    session: &Session,
    hotel_id: HotelId,
    room_number: RoomNumber,
    update: &RoomUpdate,
) -> Result<RoomUpdateOutcome> {
    let manager = require_hotel_access(db, session, hotel_id)?;
    if update.is_empty() {
        require_room(db.connection(), hotel_id, room_number)?;
        return Ok(RoomUpdateOutcome::NothingToUpdate);
    }

    let tx = db.begin_transaction()?;
    let current = require_room(&tx, hotel_id, room_number)?;
    let price = update.price.unwrap_or(current.price);
    let image_url = update.image_url.clone().or(current.image_url);
    let updated_on = timestamp_now();

    tx.execute(
        "UPDATE Rooms SET price = ?1, imageURL = ?2 WHERE hotelID = ?3 AND roomNumber = ?4",
        params![price, image_url, hotel_id, room_number],
    )?;
    tx.execute(
        "INSERT INTO RoomUpdatesLog (managerID, hotelID, roomNumber, updatedOn)
         VALUES (?1, ?2, ?3, ?4)",
        params![manager, hotel_id, room_number, updated_on],
    )?;
    tx.commit()?;

    log::info!("user {manager} updated room {room_number} of hotel {hotel_id}");
    Ok(RoomUpdateOutcome::Updated {
        room: Room {
            hotel_id,
            room_number,
            price,
            image_url,
        },
        updated_on,
    })
}
