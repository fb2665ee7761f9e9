//! Integration tests for loading CSV reference data.

mod common;

use std::fs;
use std::path::Path;

use common::{count, create_test_database, session_for};
use hotel::import::{import_directory, BOOKINGS_FILE, COMPANIES_FILE, HOTELS_FILE, ROOMS_FILE, USERS_FILE};
use hotel::operations::{log_in, recent_bookings, regular_customers};
use hotel::{Error, HotelId, Session};

fn write_fixtures(dir: &Path) {
    fs::write(
        dir.join(USERS_FILE),
        "userID,name,password,userType\n\
         1,Ada Admin,admin,Admin\n\
         2,Mona Manager,mgr,manager\n\
         10,Cora Customer,cust,customer\n",
    )
    .unwrap();
    fs::write(
        dir.join(HOTELS_FILE),
        "hotelID,hotelName,latitude,longitude,dateEstablished,managerUserID\n\
         5,Seaside Inn,10.5,10.25,1999-04-01,2\n",
    )
    .unwrap();
    fs::write(
        dir.join(ROOMS_FILE),
        "hotelID,roomNumber,price,imageURL\n5,101,150,\n5,102,90,https://img.example/102.png\n",
    )
    .unwrap();
    fs::write(
        dir.join(COMPANIES_FILE),
        "companyID,name,address,isCertified\n1,FixIt Co,12 Main St,f\n",
    )
    .unwrap();
    fs::write(
        dir.join(BOOKINGS_FILE),
        "bookingID,customerID,hotelID,roomNumber,bookingDate\n\
         1,10,5,101,2024-01-05\n\
         2,10,5,102,2024-01-06\n",
    )
    .unwrap();
}

#[test]
fn test_imported_data_is_usable() {
    let mut db = create_test_database();
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());

    let summary = import_directory(&mut db, dir.path()).unwrap();
    assert_eq!(summary.users, 3);
    assert_eq!(summary.bookings, 2);
    assert_eq!(summary.total(), 3 + 1 + 2 + 1 + 2);

    let mut session = Session::anonymous();
    assert!(log_in(&db, &mut session, "10", "cust").unwrap().is_some());
    let history = recent_bookings(&db, &session).unwrap();
    assert_eq!(history.cell(0, "bookingDate"), Some("2024-01-06"));

    let top = regular_customers(&db, &session_for(2), HotelId::new(5)).unwrap();
    assert_eq!(top.cell(0, "num_bookings"), Some("2"));
}

#[test]
fn test_bad_row_loads_nothing() {
    let mut db = create_test_database();
    let dir = tempfile::tempdir().unwrap();
    write_fixtures(dir.path());
    fs::write(
        dir.path().join(BOOKINGS_FILE),
        "bookingID,customerID,hotelID,roomNumber,bookingDate\n1,10,5,101,05/01/2024\n",
    )
    .unwrap();

    let err = import_directory(&mut db, dir.path()).unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    assert_eq!(count(&db, "Users"), 0);
    assert_eq!(count(&db, "Rooms"), 0);
}

#[test]
fn test_missing_files_are_skipped() {
    let mut db = create_test_database();
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(USERS_FILE),
        "userID,name,password,userType\n7,Solo,pw,customer\n",
    )
    .unwrap();

    let summary = import_directory(&mut db, dir.path()).unwrap();
    assert_eq!(summary.total(), 1);
}
