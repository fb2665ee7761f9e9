//! Shared test utilities for unit tests.
//!
//! This module provides a throwaway database and small seeding helpers used
//! across the library's test modules.

use rusqlite::params;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::model::UserId;
use crate::session::{Identity, Session};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Inserts a user with a fixed id and password `pw`.
pub fn insert_user(db: &Database, id: i64, name: &str, user_type: &str) {
    db.connection()
        .execute(
            "INSERT INTO Users (userID, name, password, userType) VALUES (?1, ?2, 'pw', ?3)",
            params![id, name, user_type],
        )
        .unwrap();
}

/// Inserts a hotel managed by `manager`.
pub fn insert_hotel(db: &Database, id: i64, name: &str, lat: f64, long: f64, manager: i64) {
    db.connection()
        .execute(
            "INSERT INTO Hotel (hotelID, hotelName, latitude, longitude, managerUserID)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, name, lat, long, manager],
        )
        .unwrap();
}

/// Inserts a room.
pub fn insert_room(db: &Database, hotel: i64, room: i64, price: i64) {
    db.connection()
        .execute(
            "INSERT INTO Rooms (hotelID, roomNumber, price, imageURL) VALUES (?1, ?2, ?3, ?4)",
            params![hotel, room, price, format!("https://img.example/{hotel}/{room}.png")],
        )
        .unwrap();
}

/// Inserts a maintenance company.
pub fn insert_company(db: &Database, id: i64, name: &str) {
    db.connection()
        .execute(
            "INSERT INTO MaintenanceCompany (companyID, name, address, isCertified)
             VALUES (?1, ?2, 'somewhere', 1)",
            params![id, name],
        )
        .unwrap();
}

/// Inserts a booking directly, bypassing the booking workflow.
pub fn insert_booking(db: &Database, customer: i64, hotel: i64, room: i64, date: &str) {
    db.connection()
        .execute(
            "INSERT INTO RoomBookings (customerID, hotelID, roomNumber, bookingDate)
             VALUES (?1, ?2, ?3, ?4)",
            params![customer, hotel, room, date],
        )
        .unwrap();
}

/// Standard fixture: admin 1, manager 2 (hotel 5), manager 3 (hotel 6),
/// customers 10 and 11, rooms 101/102 in hotel 5 and 201 in hotel 6,
/// company 1.
pub fn seed_standard(db: &Database) {
    insert_user(db, 1, "Ada Admin", "admin");
    insert_user(db, 2, "Mona Manager", "manager");
    insert_user(db, 3, "Otto Other", "Manager");
    insert_user(db, 10, "Cora Customer", "customer");
    insert_user(db, 11, "Carl Customer", "Customer");
    insert_hotel(db, 5, "Seaside Inn", 10.0, 10.0, 2);
    insert_hotel(db, 6, "Mountain Lodge", 80.0, 80.0, 3);
    insert_room(db, 5, 101, 150);
    insert_room(db, 5, 102, 90);
    insert_room(db, 6, 201, 300);
    insert_company(db, 1, "FixIt Co");
}

/// Returns a session logged in as `user_id`.
#[must_use]
pub fn session_for(user_id: i64) -> Session {
    let mut session = Session::anonymous();
    session.authenticate(Identity {
        user_id: UserId::new(user_id),
        name: format!("user{user_id}"),
    });
    session
}
