//! SQL functions registered on every connection.

use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

use crate::error::Result;

/// Name of the distance function available to SQL statements.
pub const DISTANCE_FUNCTION: &str = "calculate_distance";

/// Straight-line distance between two (latitude, longitude) pairs.
///
/// Coordinates are treated as points on a plane, not on a sphere.
///
/// # Examples
///
/// ```
/// use hotel::database::euclidean_distance;
///
/// assert_eq!(euclidean_distance(0.0, 0.0, 3.0, 4.0), 5.0);
/// ```
#[must_use]
pub fn euclidean_distance(lat1: f64, long1: f64, lat2: f64, long2: f64) -> f64 {
    (lat1 - lat2).hypot(long1 - long2)
}

/// Registers `calculate_distance(lat1, long1, lat2, long2)` on `conn`.
///
/// # Errors
///
/// Returns an error if `SQLite` refuses the registration.
pub(super) fn register_functions(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        DISTANCE_FUNCTION,
        4,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let lat1: f64 = ctx.get(0)?;
            let long1: f64 = ctx.get(1)?;
            let lat2: f64 = ctx.get(2)?;
            let long2: f64 = ctx.get(3)?;
            Ok(euclidean_distance(lat1, long1, lat2, long2))
        },
    )?;
    Ok(())
}
