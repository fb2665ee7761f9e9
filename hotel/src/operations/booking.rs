//! Room booking.
//!
//! A booking runs through a fixed sequence of stages:
//!
//! 1. **Price lookup**: the room must exist; its price is remembered
//! 2. **Availability check**: no booking may exist for the room and date
//! 3. **Insert**: the booking row is written under the session identity
//!
//! Any rejection ends the workflow with an error and leaves `RoomBookings`
//! untouched. The store's UNIQUE constraint on (hotel, room, date) backs the
//! availability check, so a booking that slips in between the check and the
//! insert is reported as the same conflict.
//!
//! # Examples
//!
//! ```no_run
//! use hotel::database::{Database, DatabaseConfig};
//! use hotel::operations::{book_room, BookingRequest};
//! use hotel::{HotelId, RoomNumber, Session};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/hotels.db")).unwrap();
//! let session = Session::anonymous();
//! let request = BookingRequest {
//!     hotel_id: HotelId::new(5),
//!     room_number: RoomNumber::new(101),
//!     date: "2024-06-01".parse().unwrap(),
//! };
//! match book_room(&db, &session, request) {
//!     Ok(confirmation) => println!("booked for {}", confirmation.price),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use rusqlite::params;

use crate::database::{is_unique_violation, Database};
use crate::error::{Error, Result};
use crate::model::{BookingId, HotelId, IsoDate, Price, RoomNumber, UserId};
use crate::session::Session;

use super::lookup::find_room;

/// The room and date a customer wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRequest {
    /// Hotel of the room.
    pub hotel_id: HotelId,
    /// Room within the hotel.
    pub room_number: RoomNumber,
    /// Night of the stay.
    pub date: IsoDate,
}

/// Where a [`BookingWorkflow`] currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStage {
    /// Next step reads the room price.
    PriceLookup,
    /// Next step checks for an existing booking.
    AvailabilityCheck,
    /// Next step writes the booking.
    Insert,
    /// The booking has been written.
    Done,
}

/// A successful booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    /// Store-generated booking id.
    pub booking_id: BookingId,
    /// The booked room and date.
    pub request: BookingRequest,
    /// Price of the room.
    pub price: Price,
}

/// Drives one booking attempt stage by stage.
#[derive(Debug)]
pub struct BookingWorkflow<'a> {
    db: &'a Database,
    customer: UserId,
    request: BookingRequest,
    stage: BookingStage,
    price: Option<Price>,
    booking_id: Option<BookingId>,
}

impl<'a> BookingWorkflow<'a> {
    /// Starts a booking for the session identity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotLoggedIn`] for an anonymous session.
    pub fn new(db: &'a Database, session: &Session, request: BookingRequest) -> Result<Self> {
        let customer = session.require_identity()?.user_id;
        Ok(Self {
            db,
            customer,
            request,
            stage: BookingStage::PriceLookup,
            price: None,
            booking_id: None,
        })
    }

    /// The stage the next call to [`step`](Self::step) will run.
    #[must_use]
    pub const fn stage(&self) -> BookingStage {
        self.stage
    }

    /// The room price, known once the price lookup has run.
    #[must_use]
    pub const fn price(&self) -> Option<Price> {
        self.price
    }

    /// Runs the current stage and advances to the next one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the room does not exist,
    /// [`Error::BookingConflict`] if the date is taken, or a store error.
    pub fn step(&mut self) -> Result<BookingStage> {
        let BookingRequest {
            hotel_id,
            room_number,
            date,
        } = self.request;

        self.stage = match self.stage {
            BookingStage::PriceLookup => {
                let room = find_room(self.db.connection(), hotel_id, room_number)?.ok_or_else(
                    || Error::not_found(format!("room {room_number} of hotel {hotel_id}")),
                )?;
                self.price = Some(room.price);
                BookingStage::AvailabilityCheck
            }
            BookingStage::AvailabilityCheck => {
                let taken = self.db.query_count(
                    "SELECT 1 FROM RoomBookings
                     WHERE hotelID = ?1 AND roomNumber = ?2 AND bookingDate = ?3",
                    params![hotel_id, room_number, date],
                )? > 0;
                if taken {
                    return Err(self.conflict());
                }
                BookingStage::Insert
            }
            BookingStage::Insert => {
                self.booking_id = Some(insert_booking(self.db, self.customer, &self.request)?);
                BookingStage::Done
            }
            BookingStage::Done => BookingStage::Done,
        };
        Ok(self.stage)
    }

    /// Runs every remaining stage.
    ///
    /// # Errors
    ///
    /// Returns the first rejection; see [`step`](Self::step).
    pub fn run(mut self) -> Result<BookingConfirmation> {
        while self.stage != BookingStage::Done {
            self.step()?;
        }
        match (self.booking_id, self.price) {
            (Some(booking_id), Some(price)) => {
                log::info!(
                    "booking {booking_id}: user {} took room {} of hotel {} on {}",
                    self.customer,
                    self.request.room_number,
                    self.request.hotel_id,
                    self.request.date
                );
                Ok(BookingConfirmation {
                    booking_id,
                    request: self.request,
                    price,
                })
            }
            _ => Err(Error::invalid_input("booking", "workflow finished without a booking")),
        }
    }

    fn conflict(&self) -> Error {
        Error::BookingConflict {
            hotel_id: self.request.hotel_id,
            room_number: self.request.room_number,
            date: self.request.date,
        }
    }
}

/// Writes a booking row, mapping a UNIQUE violation to a conflict.
pub(crate) fn insert_booking(db: &Database, customer: UserId, request: &BookingRequest) -> Result<BookingId> {
    db.connection()
        .query_row(
            "INSERT INTO RoomBookings (customerID, hotelID, roomNumber, bookingDate)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING bookingID",
            params![customer, request.hotel_id, request.room_number, request.date],
            |row| row.get(0),
        )
        .map_err(|e| {
            if is_unique_violation(&e) {
                log::debug!("late booking conflict: {e}");
                Error::BookingConflict {
                    hotel_id: request.hotel_id,
                    room_number: request.room_number,
                    date: request.date,
                }
            } else {
                Error::Database(e)
            }
        })
}

/// Books a room for the session identity.
///
/// # Errors
///
/// See [`BookingWorkflow::step`]; additionally [`Error::NotLoggedIn`].
pub fn book_room(db: &Database, session: &Session, request: BookingRequest) -> Result<BookingConfirmation> {
    BookingWorkflow::new(db, session, request)?.run()
}
