#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # hotel
//!
//! Hotel booking and management over an embedded `SQLite` store.
//!
//! This library holds everything behind the interactive `hotel` client:
//! opening the store, the session and authorization model, the booking
//! workflow, room and repair management, and the history reports.
//!
//! ## Core Types
//!
//! - [`Database`] and [`QueryResult`]: the store and its tabular results
//! - [`Session`] and [`Identity`]: who is logged in
//! - [`HotelId`], [`RoomNumber`], [`IsoDate`], [`Price`]: validated values
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`Verbosity`]: the stderr operator channel
//!
//! ## Examples
//!
//! ```no_run
//! use hotel::database::{Database, DatabaseConfig};
//! use hotel::operations::{book_room, log_in, BookingRequest};
//! use hotel::{HotelId, RoomNumber, Session};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/hotels.db")).unwrap();
//! let mut session = Session::anonymous();
//! log_in(&db, &mut session, "10", "secret").unwrap();
//!
//! let request = BookingRequest {
//!     hotel_id: HotelId::new(5),
//!     room_number: RoomNumber::new(101),
//!     date: "2024-06-01".parse().unwrap(),
//! };
//! let confirmation = book_room(&db, &session, request).unwrap();
//! println!("booked at {}", confirmation.price);
//! ```

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod import;
pub mod logging;
pub mod model;
pub mod operations;
pub mod session;

// Re-export key types at crate root for convenience
pub use auth::{AccessDecision, AccessDenial};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig, QueryResult};
pub use error::{Error, Result};
pub use import::{import_directory, ImportSummary};
pub use logging::{init_logger, Logger, Verbosity};
pub use model::{
    BookingId, CompanyId, HotelId, IsoDate, Price, RepairId, Room, RoomNumber, UserId, UserType,
};
pub use session::{Identity, Session};
