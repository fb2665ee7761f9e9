//! End-to-end tests driving the `hotel` binary with scripted terminal input.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_wrong_arity_is_usage_error() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["hotels", "5432"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_port_zero_is_rejected() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--data-dir")
        .arg(&env.data_dir)
        .args(["hotels", "0", "operator"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("port"));
}

#[test]
fn test_missing_database_without_autoinit() {
    let env = TestEnv::new();
    env.command()
        .arg("--disable-autoinit")
        .write_stdin("9\n")
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::contains("User Interface").not());
    assert!(!env.database_path().exists());
}

#[test]
fn test_greeting_and_goodbye() {
    let env = TestEnv::new();
    let out = env.session("9\n");
    assert!(out.contains("Connecting to database...Done"));
    assert!(out.contains("User Interface"));
    assert!(out.contains("MAIN MENU"));
    assert!(out.trim_end().ends_with("Bye !"));
    assert!(env.database_path().exists());
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let env = TestEnv::new();
    let out = env.session("2\n");
    assert!(out.contains("Enter userID: "));
    assert!(out.contains("Disconnecting from database...Done"));
}

#[test]
fn test_unrecognized_choice() {
    let env = TestEnv::new();
    let out = env.session("5\nnope\n9\n");
    assert!(out.contains("Unrecognized choice!"));
    assert!(out.contains("Your input is invalid!"));
}

#[test]
fn test_create_user_and_log_in() {
    let env = TestEnv::new();
    let out = env.session("1\nAna\nsecret\n2\n1\nwrong\n2\n1\nsecret\n20\n9\n");
    assert!(out.contains("User successfully created with userID = 1"));
    assert!(out.contains("Invalid USER ID or password. Please try again."));
    assert!(out.contains("Welcome, Ana!"));
    assert!(out.contains("20. Log out"));
}

#[test]
fn test_booking_conflict() {
    let env = TestEnv::seeded();
    let out = env.session(
        "2\n10\ncust\n3\n5\n101\n2024-06-01\n20\n2\n11\ncust2\n3\n5\n101\n2024-06-01\n20\n9\n",
    );
    assert_eq!(out.matches("Room booked successfully!").count(), 1);
    assert!(out.contains("already booked on 2024-06-01"));

    // The accepted booking echoes its price, the rejected one does not
    let (first, second) = out.split_at(out.find("Welcome, Carl Customer!").unwrap());
    assert!(first.contains("Room price: 150"));
    assert!(!second.contains("Room price"));

    let bookings: i64 = env
        .connection()
        .query_row("SELECT COUNT(*) FROM RoomBookings", [], |row| row.get(0))
        .unwrap();
    assert_eq!(bookings, 1);
}

#[test]
fn test_recent_booking_history() {
    let env = TestEnv::seeded();
    let out = env.session("2\n10\ncust\n4\n3\n5\n102\n2024-07-04\n4\n20\n9\n");
    assert!(out.contains("You have no booking history yet."));
    assert!(out.contains("bookingDate"));
    assert!(out.contains("2024-07-04"));
    assert!(out.contains("You have reached the end of your booking history."));
}

#[test]
fn test_full_booking_history_has_no_end_marker() {
    let env = TestEnv::seeded();
    let bookings: String = (1..=5)
        .map(|day| format!("3\n5\n101\n2024-08-0{day}\n"))
        .collect();
    let out = env.session(&format!("2\n10\ncust\n{bookings}4\n20\n9\n"));
    assert_eq!(out.matches("Room booked successfully!").count(), 5);
    assert!(out.contains("2024-08-05"));
    assert!(!out.contains("You have reached the end of your booking history."));
}

#[test]
fn test_customer_denied_regular_customers() {
    let env = TestEnv::seeded();
    let out = env.session("2\n10\ncust\n8\n5\n20\n9\n");
    assert!(out.contains("You are not authorized to access this hotel's information"));
    assert!(!out.contains("num_bookings"));
}

#[test]
fn test_no_hotels_found() {
    let env = TestEnv::seeded();
    let out = env.session("2\n10\ncust\n1\n-100\n-100\n1\n0\n0\n20\n9\n");
    assert!(out.contains("No hotels found within 30 units"));
    assert!(out.contains("Seaside Inn"));
    assert!(!out.contains("Mountain Lodge"));
}

#[test]
fn test_manager_updates_room() {
    let env = TestEnv::seeded();
    let out = env.session("2\n2\nmgr\n5\n5\n101\n175\nskip\n6\n5\n20\n9\n");
    assert!(out.contains("Price: 150"));
    assert!(out.contains("Room information updated successfully! Timestamp: "));
    assert!(out.contains("updatedOn"));

    let price: i64 = env
        .connection()
        .query_row(
            "SELECT price FROM Rooms WHERE hotelID = 5 AND roomNumber = 101",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(price, 175);
}

#[test]
fn test_other_manager_cannot_request_repair() {
    let env = TestEnv::seeded();
    let out = env.session("2\n3\nother\n9\n5\n20\n9\n");
    assert!(out.contains("outside of your management"));
    // Denied before the remaining repair prompts
    assert!(!out.contains("Enter company ID: "));
}

#[test]
fn test_repair_request_and_history() {
    let env = TestEnv::seeded();
    let out = env.session("2\n2\nmgr\n9\n5\n101\n1\n2024-08-01\n10\n5\n101\n11\n6\n20\n9\n");
    assert!(out.contains("Room repair request placed successfully. Repair ID: 1"));
    assert!(out.contains("Room repair history for the given inputs:"));
    assert!(out.contains("2024-08-01"));
    assert!(out.contains("outside of your management (hotel 6)"));
}

#[test]
fn test_import_flag_loads_fixtures() {
    let env = TestEnv::new();
    let fixtures = env.write_fixtures("import");
    let output = env
        .command()
        .arg("--import")
        .arg(&fixtures)
        .write_stdin("2\n10\ncust\n2\n5\n2024-06-01\n20\n9\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let out = String::from_utf8(output.stdout).unwrap();
    assert!(out.contains("Imported 11 rows"));
    assert!(out.contains("Rooms available for Seaside Inn on 2024-06-01"));
}

#[test]
fn test_import_from_missing_directory() {
    let env = TestEnv::new();
    env.command()
        .arg("--import")
        .arg(env.temp_path.join("nowhere"))
        .write_stdin("9\n")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("cannot import"));
}
