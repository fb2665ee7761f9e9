//! Hotel browsing: proximity search and room availability.

use rusqlite::params;

use crate::database::{Database, QueryResult};
use crate::error::Result;
use crate::model::{HotelId, IsoDate};
use crate::session::Session;

use super::lookup::require_hotel;

/// Maximum distance from the query point for a hotel to be listed.
pub const SEARCH_RADIUS: f64 = 30.0;

/// Lists hotels within [`SEARCH_RADIUS`] of a point, by hotel id.
///
/// # Errors
///
/// Returns [`crate::Error::NotLoggedIn`] for an anonymous session, or a
/// store error.
pub fn hotels_near(db: &Database, session: &Session, latitude: f64, longitude: f64) -> Result<QueryResult> {
    session.require_identity()?;
    db.query_rows(
        "SELECT hotelID, hotelName, latitude, longitude, dateEstablished
         FROM Hotel
         WHERE calculate_distance(latitude, longitude, ?1, ?2) <= ?3
         ORDER BY hotelID",
        params![latitude, longitude, SEARCH_RADIUS],
    )
}

/// Lists rooms of a hotel that are not booked on `date`, by room number.
///
/// # Errors
///
/// Returns [`crate::Error::NotFound`] for an unknown hotel,
/// [`crate::Error::NotLoggedIn`] for an anonymous session, or a store error.
pub fn available_rooms(db: &Database, session: &Session, hotel_id: HotelId, date: IsoDate) -> Result<QueryResult> {
    session.require_identity()?;
    require_hotel(db, hotel_id)?;
    db.query_rows(
        "SELECT R.roomNumber, R.price, H.hotelName
         FROM Rooms R
         JOIN Hotel H ON H.hotelID = R.hotelID
         WHERE R.hotelID = ?1
           AND R.roomNumber NOT IN (
               SELECT B.roomNumber FROM RoomBookings B
               WHERE B.hotelID = ?1 AND B.bookingDate = ?2
           )
         ORDER BY R.roomNumber",
        params![hotel_id, date],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{
        create_test_database, insert_booking, insert_hotel, seed_standard, session_for,
    };
    use crate::error::Error;

    #[test]
    fn test_hotels_near_uses_radius() {
        let db = create_test_database();
        seed_standard(&db);
        let session = session_for(10);

        // Seaside Inn at (10, 10) is ~14.1 away; Mountain Lodge is far away
        let result = hotels_near(&db, &session, 0.0, 0.0).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.cell(0, "hotelName"), Some("Seaside Inn"));

        // Neither hotel is within range of the midpoint (~49.5 away each)
        assert!(hotels_near(&db, &session, 45.0, 45.0).unwrap().is_empty());
    }

    #[test]
    fn test_hotels_near_lists_by_id_not_distance() {
        let db = create_test_database();
        seed_standard(&db);
        insert_hotel(&db, 7, "Harbor View", 20.0, 20.0, 2);
        let session = session_for(10);

        // From (17, 17): Harbor View ~4.2 away, Seaside Inn ~9.9 away
        let result = hotels_near(&db, &session, 17.0, 17.0).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.cell(0, "hotelID"), Some("5"));
        assert_eq!(result.cell(1, "hotelID"), Some("7"));
    }

    #[test]
    fn test_hotels_near_nothing_in_range() {
        let db = create_test_database();
        seed_standard(&db);
        let result = hotels_near(&db, &session_for(10), -80.0, -80.0).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_hotels_near_boundary_is_inclusive() {
        let db = create_test_database();
        seed_standard(&db);
        // (10, 40) is exactly 30 from Seaside Inn
        let result = hotels_near(&db, &session_for(10), 10.0, 40.0).unwrap();
        assert_eq!(result.cell(0, "hotelID"), Some("5"));
    }

    #[test]
    fn test_available_rooms_excludes_booked() {
        let db = create_test_database();
        seed_standard(&db);
        insert_booking(&db, 10, 5, 101, "2024-06-01");
        let session = session_for(11);

        let date: IsoDate = "2024-06-01".parse().unwrap();
        let result = available_rooms(&db, &session, HotelId::new(5), date).unwrap();
        assert_eq!(result.columns, vec!["roomNumber", "price", "hotelName"]);
        assert_eq!(result.rows, vec![vec!["102", "90", "Seaside Inn"]]);

        let other: IsoDate = "2024-06-02".parse().unwrap();
        let result = available_rooms(&db, &session, HotelId::new(5), other).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.cell(0, "roomNumber"), Some("101"));
    }

    #[test]
    fn test_available_rooms_unknown_hotel() {
        let db = create_test_database();
        seed_standard(&db);
        let date: IsoDate = "2024-06-01".parse().unwrap();
        let err = available_rooms(&db, &session_for(10), HotelId::new(99), date).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_browsing_requires_login() {
        let db = create_test_database();
        let err = hotels_near(&db, &Session::anonymous(), 0.0, 0.0).unwrap_err();
        assert!(matches!(err, Error::NotLoggedIn));
    }
}
