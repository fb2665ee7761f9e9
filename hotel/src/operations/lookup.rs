//! Existence checks shared by the workflows.

use rusqlite::{params, Connection, OptionalExtension};

use crate::database::Database;
use crate::error::{Error, Result};
use crate::model::{CompanyId, HotelId, Price, Room, RoomNumber};

/// Fails with [`Error::NotFound`] unless the hotel exists.
///
/// # Errors
///
/// Returns `NotFound` for an unknown hotel, or a store error.
pub fn require_hotel(db: &Database, hotel_id: HotelId) -> Result<()> {
    let found = db.query_count("SELECT 1 FROM Hotel WHERE hotelID = ?1", params![hotel_id])? > 0;
    if found {
        Ok(())
    } else {
        Err(Error::not_found(format!("hotel {hotel_id}")))
    }
}

/// Fails with [`Error::NotFound`] unless the maintenance company exists.
///
/// # Errors
///
/// Returns `NotFound` for an unknown company, or a store error.
pub fn require_company(conn: &Connection, company_id: CompanyId) -> Result<()> {
    let found = conn
        .query_row(
            "SELECT 1 FROM MaintenanceCompany WHERE companyID = ?1",
            params![company_id],
            |_| Ok(()),
        )
        .optional()?;
    found.ok_or_else(|| Error::not_found(format!("maintenance company {company_id}")))
}

/// Reads one room, if it exists.
///
/// # Errors
///
/// Returns a store error if the query fails.
pub fn find_room(conn: &Connection, hotel_id: HotelId, room_number: RoomNumber) -> Result<Option<Room>> {
    let room = conn
        .query_row(
            "SELECT hotelID, roomNumber, price, imageURL FROM Rooms
             WHERE hotelID = ?1 AND roomNumber = ?2",
            params![hotel_id, room_number],
            |row| {
                Ok(Room {
                    hotel_id: row.get(0)?,
                    room_number: row.get(1)?,
                    price: row.get::<_, Price>(2)?,
                    image_url: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(room)
}

/// Reads one room, failing with [`Error::NotFound`] if it does not exist.
///
/// # Errors
///
/// Returns `NotFound` for an unknown room, or a store error.
pub fn require_room(conn: &Connection, hotel_id: HotelId, room_number: RoomNumber) -> Result<Room> {
    find_room(conn, hotel_id, room_number)?
        .ok_or_else(|| Error::not_found(format!("room {room_number} of hotel {hotel_id}")))
}
