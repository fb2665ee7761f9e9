//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders that pass the connection parameters
//! - CSV fixtures and a seeded database

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use hotel::{import_directory, Database, DatabaseConfig};

/// Database name used by every test.
pub const DB_NAME: &str = "hotels";

/// Fixture users: admin 1, manager 2 (hotel 5), manager 3 (hotel 6),
/// customers 10 and 11.
pub const USERS_CSV: &str = "\
userID,name,password,userType
1,Ada Admin,admin,admin
2,Mona Manager,mgr,manager
3,Otto Other,other,manager
10,Cora Customer,cust,customer
11,Carl Customer,cust2,customer
";

/// Fixture hotels: Seaside Inn near (10, 10), Mountain Lodge near (80, 80).
pub const HOTELS_CSV: &str = "\
hotelID,hotelName,latitude,longitude,dateEstablished,managerUserID
5,Seaside Inn,10,10,1999-04-01,2
6,Mountain Lodge,80,80,2005-09-12,3
";

/// Fixture rooms.
pub const ROOMS_CSV: &str = "\
hotelID,roomNumber,price,imageURL
5,101,150,https://img.example/5/101.png
5,102,90,
6,201,300,https://img.example/6/201.png
";

/// Fixture maintenance companies.
pub const COMPANIES_CSV: &str = "\
companyID,name,address,isCertified
1,FixIt Co,12 Main St,true
";

/// Test environment with an isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the hotel data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; the client creates it on first
    /// connect.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("hotel-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Create a test environment whose database holds the CSV fixtures.
    pub fn seeded() -> Self {
        let env = Self::new();
        let fixtures = env.write_fixtures("seed");
        let mut db = Database::open(DatabaseConfig::new(env.database_path()))
            .expect("Failed to open test database");
        import_directory(&mut db, &fixtures).expect("Failed to import fixtures");
        db.close().expect("Failed to close test database");
        env
    }

    /// Get a bare command builder without pre-configured arguments.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("hotel").expect("Failed to find hotel binary")
    }

    /// Get a command builder with the data directory and the connection
    /// parameters set.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .args([DB_NAME, "5432", "operator"]);
        cmd
    }

    /// Run a session with `script` as the terminal input and return stdout.
    ///
    /// # Panics
    /// Panics if the client exits unsuccessfully.
    pub fn session(&self, script: &str) -> String {
        let output = self
            .command()
            .write_stdin(script)
            .output()
            .expect("Failed to run hotel");
        assert!(
            output.status.success(),
            "Session failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Path of the database file the client uses.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(format!("{DB_NAME}.db"))
    }

    /// Write the CSV fixtures into a new directory and return its path.
    pub fn write_fixtures(&self, name: &str) -> PathBuf {
        let dir = self.temp_path.join(name);
        fs::create_dir_all(&dir).expect("Failed to create fixture directory");
        write(&dir, "users.csv", USERS_CSV);
        write(&dir, "hotel.csv", HOTELS_CSV);
        write(&dir, "rooms.csv", ROOMS_CSV);
        write(&dir, "company.csv", COMPANIES_CSV);
        dir
    }

    /// Open the client's database directly.
    pub fn connection(&self) -> rusqlite::Connection {
        rusqlite::Connection::open(self.database_path()).expect("Failed to open database")
    }
}

fn write(dir: &Path, file: &str, contents: &str) {
    fs::write(dir.join(file), contents).expect("Failed to write fixture");
}
