//! Integration tests for the booking workflow and the customer views.

mod common;

use common::{count, create_test_database, seed, session_for};
use hotel::operations::{available_rooms, book_room, hotels_near, recent_bookings, BookingRequest};
use hotel::{Error, HotelId, IsoDate, RoomNumber};
use proptest::prelude::*;

fn request(hotel: i64, room: i64, date: &str) -> BookingRequest {
    BookingRequest {
        hotel_id: HotelId::new(hotel),
        room_number: RoomNumber::new(room),
        date: date.parse().unwrap(),
    }
}

#[test]
fn test_book_then_conflict() {
    let db = create_test_database();
    seed(&db);

    let confirmation = book_room(&db, &session_for(10), request(5, 101, "2024-06-01")).unwrap();
    assert_eq!(confirmation.price.value(), 150);

    let err = book_room(&db, &session_for(11), request(5, 101, "2024-06-01")).unwrap_err();
    assert!(matches!(err, Error::BookingConflict { .. }));
    assert!(err.is_recoverable());
    assert_eq!(count(&db, "RoomBookings"), 1);
}

#[test]
fn test_booked_room_disappears_from_availability() {
    let db = create_test_database();
    seed(&db);
    let session = session_for(10);
    let date: IsoDate = "2024-06-01".parse().unwrap();

    let before = available_rooms(&db, &session, HotelId::new(5), date).unwrap();
    assert_eq!(before.len(), 2);

    book_room(&db, &session, request(5, 101, "2024-06-01")).unwrap();
    let after = available_rooms(&db, &session, HotelId::new(5), date).unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after.cell(0, "roomNumber"), Some("102"));
    assert_eq!(after.cell(0, "hotelName"), Some("Seaside Inn"));

    // Other dates are unaffected
    let next_day = available_rooms(&db, &session, HotelId::new(5), "2024-06-02".parse().unwrap()).unwrap();
    assert_eq!(next_day.len(), 2);
}

#[test]
fn test_proximity_search_without_hotels_is_empty() {
    let db = create_test_database();
    seed(&db);
    let hotels = hotels_near(&db, &session_for(10), -50.0, -50.0).unwrap();
    assert!(hotels.is_empty());
    assert_eq!(hotels.len(), 0);
}

#[test]
fn test_recent_bookings_newest_first_and_limited() {
    let db = create_test_database();
    seed(&db);
    let session = session_for(10);
    for day in 1..=7 {
        book_room(&db, &session, request(5, 102, &format!("2024-03-0{day}"))).unwrap();
    }
    book_room(&db, &session_for(11), request(5, 101, "2024-03-09")).unwrap();

    let history = recent_bookings(&db, &session).unwrap();
    assert_eq!(history.len(), 5);
    assert_eq!(history.cell(0, "bookingDate"), Some("2024-03-07"));
    assert_eq!(history.cell(4, "bookingDate"), Some("2024-03-03"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Whatever sequence of attempts is made, each slot is booked at most once.
    #[test]
    fn prop_slots_are_booked_at_most_once(
        attempts in prop::collection::vec((0usize..2, 0usize..2, 1u32..4), 1..20)
    ) {
        let db = create_test_database();
        seed(&db);
        let rooms = [101, 102];
        let customers = [10, 11];

        let mut taken = std::collections::HashSet::new();
        for (room, customer, day) in attempts {
            let slot = request(5, rooms[room], &format!("2024-05-0{day}"));
            let result = book_room(&db, &session_for(customers[customer]), slot);
            if taken.insert((room, day)) {
                prop_assert!(result.is_ok());
            } else {
                let is_conflict = matches!(result, Err(Error::BookingConflict { .. }));
                prop_assert!(is_conflict);
            }
        }
        prop_assert_eq!(count(&db, "RoomBookings"), taken.len());
    }
}
