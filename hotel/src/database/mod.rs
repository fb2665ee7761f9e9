//! The SQLite store behind every workflow.
//!
//! One [`Database`] is opened per client run. It owns the schema version
//! check, registers `calculate_distance` for the proximity search and runs
//! every parameterized query.
//!
//! # Examples
//!
//! ```no_run
//! use hotel::database::{Database, DatabaseConfig};
//! use rusqlite::params;
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/hotels.db")).unwrap();
//! let hotels = db
//!     .query_rows("SELECT hotelID, hotelName FROM Hotel WHERE hotelID = ?1", params![5])
//!     .unwrap();
//! for row in &hotels.rows {
//!     println!("{}", row.join(" | "));
//! }
//! ```

mod config;
mod connection;
mod executor;
mod functions;
pub mod migrations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;
pub use executor::QueryResult;
pub use functions::{euclidean_distance, DISTANCE_FUNCTION};

pub(crate) use executor::is_unique_violation;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
pub use schema::CURRENT_SCHEMA_VERSION;
