//! Read-only history and statistics views.
//!
//! Every hotel-scoped report goes through the authorization check first.
//! "Recent" and "top" reports return at most [`REPORT_LIMIT`] rows.

use rusqlite::params;

use crate::auth::require_hotel_access;
use crate::database::{Database, QueryResult};
use crate::error::{Error, Result};
use crate::model::{HotelId, IsoDate, RoomNumber};
use crate::session::Session;

/// Row limit of every "recent N" and "top N" report.
pub const REPORT_LIMIT: usize = 5;

/// The session user's most recent bookings, newest first.
///
/// # Errors
///
/// Returns [`Error::NotLoggedIn`] for an anonymous session, or a store error.
pub fn recent_bookings(db: &Database, session: &Session) -> Result<QueryResult> {
    let customer = session.require_identity()?.user_id;
    db.query_rows(
        "SELECT bookingID, hotelID, roomNumber, bookingDate
         FROM RoomBookings
         WHERE customerID = ?1
         ORDER BY bookingDate DESC, bookingID DESC
         LIMIT ?2",
        params![customer, REPORT_LIMIT],
    )
}

/// Every booking of a hotel with a date in `from..=to`, oldest first.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `from` is after `to`, an
/// authorization error, or a store error.
pub fn hotel_booking_history(
    db: &Database,
    session: &Session,
    hotel_id: HotelId,
    from: IsoDate,
    to: IsoDate,
) -> Result<QueryResult> {
    require_hotel_access(db, session, hotel_id)?;
    if from > to {
        return Err(Error::invalid_input(
            "date range",
            format!("{from} is after {to}"),
        ));
    }
    db.query_rows(
        "SELECT B.bookingID, U.name, B.hotelID, B.roomNumber, B.bookingDate
         FROM RoomBookings B
         JOIN Users U ON U.userID = B.customerID
         WHERE B.hotelID = ?1 AND B.bookingDate BETWEEN ?2 AND ?3
         ORDER BY B.bookingDate, B.bookingID",
        params![hotel_id, from, to],
    )
}

/// The customers with the most bookings at a hotel.
///
/// # Errors
///
/// Returns an authorization error or a store error.
pub fn regular_customers(db: &Database, session: &Session, hotel_id: HotelId) -> Result<QueryResult> {
    require_hotel_access(db, session, hotel_id)?;
    db.query_rows(
        "SELECT U.userID, U.name, COUNT(*) AS num_bookings
         FROM RoomBookings B
         JOIN Users U ON U.userID = B.customerID
         WHERE B.hotelID = ?1 AND lower(U.userType) = 'customer'
         GROUP BY U.userID, U.name
         ORDER BY num_bookings DESC, U.userID
         LIMIT ?2",
        params![hotel_id, REPORT_LIMIT],
    )
}

/// The latest room-info changes at a hotel, newest first.
///
/// # Errors
///
/// Returns an authorization error or a store error.
pub fn recent_room_updates(db: &Database, session: &Session, hotel_id: HotelId) -> Result<QueryResult> {
    require_hotel_access(db, session, hotel_id)?;
    db.query_rows(
        "SELECT hotelID, roomNumber, managerID, updatedOn
         FROM RoomUpdatesLog
         WHERE hotelID = ?1
         ORDER BY updatedOn DESC, updateNumber DESC
         LIMIT ?2",
        params![hotel_id, REPORT_LIMIT],
    )
}

/// Requested repairs of one room.
///
/// Only repairs with a `RoomRepairRequests` entry are listed.
///
/// # Errors
///
/// Returns an authorization error or a store error.
pub fn room_repair_history(
    db: &Database,
    session: &Session,
    hotel_id: HotelId,
    room_number: RoomNumber,
) -> Result<QueryResult> {
    require_hotel_access(db, session, hotel_id)?;
    db.query_rows(
        "SELECT R.repairID, R.companyID, R.hotelID, R.roomNumber, R.repairDate
         FROM RoomRepairs R
         JOIN RoomRepairRequests RR ON RR.repairID = R.repairID
         WHERE R.hotelID = ?1 AND R.roomNumber = ?2
         ORDER BY R.roomNumber, R.repairDate, R.repairID",
        params![hotel_id, room_number],
    )
}

/// Requested repairs of every room of a hotel.
///
/// # Errors
///
/// Returns an authorization error or a store error.
pub fn hotel_repair_history(db: &Database, session: &Session, hotel_id: HotelId) -> Result<QueryResult> {
    require_hotel_access(db, session, hotel_id)?;
    db.query_rows(
        "SELECT R.repairID, R.companyID, R.hotelID, R.roomNumber, R.repairDate
         FROM RoomRepairs R
         JOIN RoomRepairRequests RR ON RR.repairID = R.repairID
         WHERE R.hotelID = ?1
         ORDER BY R.roomNumber, R.repairDate, R.repairID",
        params![hotel_id],
    )
}
