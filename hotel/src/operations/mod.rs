//! Workflows behind the menu entries.
//!
//! Each workflow takes the database and the [`Session`](crate::Session)
//! explicitly. Hotel-scoped workflows run the authorization check before
//! touching any data, and every workflow performs at most one mutating step
//! (one statement or one transaction) after all its checks pass.
//!
//! # Examples
//!
//! ```no_run
//! use hotel::database::{Database, DatabaseConfig};
//! use hotel::operations::{log_in, regular_customers};
//! use hotel::{HotelId, Session};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/hotels.db")).unwrap();
//! let mut session = Session::anonymous();
//! if log_in(&db, &mut session, "2", "secret").unwrap().is_some() {
//!     let top = regular_customers(&db, &session, HotelId::new(5)).unwrap();
//!     println!("{} regulars", top.len());
//! }
//! ```

pub mod account;
pub mod booking;
pub mod hotels;
pub mod lookup;
pub mod reports;
pub mod repairs;
pub mod rooms;

pub use account::{create_user, log_in};
pub use booking::{book_room, BookingConfirmation, BookingRequest, BookingStage, BookingWorkflow};
pub use hotels::{available_rooms, hotels_near, SEARCH_RADIUS};
pub use reports::{
    hotel_booking_history, hotel_repair_history, recent_bookings, recent_room_updates,
    regular_customers, room_repair_history, REPORT_LIMIT,
};
pub use repairs::{place_repair_request, RepairRequest};
pub use rooms::{room_details, update_room_info, RoomUpdate, RoomUpdateOutcome, SKIP};
