//! Schema creation and the version stamp in `metadata`.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION, SCHEMA_STATEMENTS, SELECT_SCHEMA_VERSION,
};

/// Creates every table and index and records the schema version, all inside
/// one transaction so a half-created schema is never left behind.
///
/// # Errors
///
/// Returns a store error if a statement fails; nothing is kept.
///
/// # Examples
///
/// ```no_run
/// use rusqlite::Connection;
/// use hotel::database::migrations::initialize_schema;
///
/// let mut conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&mut conn).unwrap();
/// ```
pub fn initialize_schema(conn: &mut Connection) -> Result<()> {
    let tx = conn.transaction()?;
    for statement in SCHEMA_STATEMENTS {
        tx.execute(statement, [])?;
    }
    tx.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;
    tx.commit()?;

    log::info!("initialized database schema version {CURRENT_SCHEMA_VERSION}");
    Ok(())
}

/// Reads the schema version stamp.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than a missing
/// metadata table or row (which both mean version 0).
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    let metadata_exists: bool = conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'metadata')",
        [],
        |row| row.get(0),
    )?;
    if !metadata_exists {
        return Ok(0);
    }

    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value
            .parse::<i32>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => Err(e.into()),
    }
}

/// Checks schema compatibility and initializes if needed.
///
/// A fresh database (version 0) is initialized; any version other than
/// [`CURRENT_SCHEMA_VERSION`] is rejected.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] for a mismatched version, or a
/// database error if initialization fails.
pub fn check_schema_compatibility(conn: &mut Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        initialize_schema(conn)?;
    } else if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    Ok(())
}
