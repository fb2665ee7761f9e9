//! Common test utilities for integration tests.
//!
//! This module provides a temporary database and fixture builders for
//! testing the hotel library through its public API.

use rusqlite::params;

use hotel::database::{Database, DatabaseConfig};
use hotel::{Identity, Session, UserId};

/// Creates a temporary test database that will be cleaned up at exit.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Inserts a user with password `pw`.
#[allow(dead_code)]
pub fn add_user(db: &Database, id: i64, name: &str, user_type: &str) {
    db.execute_update(
        "INSERT INTO Users (userID, name, password, userType) VALUES (?1, ?2, 'pw', ?3)",
        params![id, name, user_type],
    )
    .unwrap();
}

/// Inserts a hotel managed by `manager`.
#[allow(dead_code)]
pub fn add_hotel(db: &Database, id: i64, name: &str, lat: f64, long: f64, manager: i64) {
    db.execute_update(
        "INSERT INTO Hotel (hotelID, hotelName, latitude, longitude, managerUserID)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![id, name, lat, long, manager],
    )
    .unwrap();
}

/// Inserts a room without an image.
#[allow(dead_code)]
pub fn add_room(db: &Database, hotel: i64, room: i64, price: i64) {
    db.execute_update(
        "INSERT INTO Rooms (hotelID, roomNumber, price) VALUES (?1, ?2, ?3)",
        params![hotel, room, price],
    )
    .unwrap();
}

/// Admin 1, manager 2 of hotel 5, manager 3 of hotel 6, customers 10 and
/// 11, rooms 5/101 (150), 5/102 (90) and 6/201 (300), company 1.
#[allow(dead_code)]
pub fn seed(db: &Database) {
    add_user(db, 1, "Ada Admin", "admin");
    add_user(db, 2, "Mona Manager", "manager");
    add_user(db, 3, "Otto Other", "manager");
    add_user(db, 10, "Cora Customer", "customer");
    add_user(db, 11, "Carl Customer", "customer");
    add_hotel(db, 5, "Seaside Inn", 10.0, 10.0, 2);
    add_hotel(db, 6, "Mountain Lodge", 80.0, 80.0, 3);
    add_room(db, 5, 101, 150);
    add_room(db, 5, 102, 90);
    add_room(db, 6, 201, 300);
    db.execute_update(
        "INSERT INTO MaintenanceCompany (companyID, name, address, isCertified)
         VALUES (1, 'FixIt Co', '12 Main St', 1)",
        [],
    )
    .unwrap();
}

/// A session logged in as `user_id`.
#[allow(dead_code)]
pub fn session_for(user_id: i64) -> Session {
    let mut session = Session::anonymous();
    session.authenticate(Identity {
        user_id: UserId::new(user_id),
        name: format!("user {user_id}"),
    });
    session
}

/// Number of rows in `table`.
#[allow(dead_code)]
pub fn count(db: &Database, table: &str) -> usize {
    db.query_count(&format!("SELECT * FROM {table}"), []).unwrap()
}
