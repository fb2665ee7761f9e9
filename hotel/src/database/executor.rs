//! Query execution against the store.
//!
//! Every statement is prepared with bound parameters; values never become
//! part of the SQL text. Read results come back as text cells so they can be
//! printed as-is.

use rusqlite::types::ValueRef;
use rusqlite::{ffi, ErrorCode, Params};

use crate::error::Result;

use super::connection::Database;

/// A tabular query result with every cell rendered as text.
///
/// # Examples
///
/// ```
/// use hotel::QueryResult;
///
/// let result = QueryResult {
///     columns: vec!["hotelID".into(), "hotelName".into()],
///     rows: vec![vec!["5".into(), "Seaside".into()]],
/// };
/// assert_eq!(result.len(), 1);
/// assert_eq!(result.cell(0, "hotelName"), Some("Seaside"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    /// Column names, in select-list order.
    pub columns: Vec<String>,
    /// Rows in result order; each row has one cell per column.
    pub rows: Vec<Vec<String>>,
}

impl QueryResult {
    /// Number of rows returned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the query matched no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up a cell by row index and column name.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }
}

/// Renders one SQL value as display text.
///
/// NULL becomes the empty string and trailing padding is trimmed from text.
fn value_to_text(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).trim_end().to_string(),
        ValueRef::Blob(b) => format!("<{} bytes>", b.len()),
    }
}

/// Returns true if `err` is a UNIQUE or PRIMARY KEY constraint violation.
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == ErrorCode::ConstraintViolation
                && matches!(
                    e.extended_code,
                    ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                )
    )
}

impl Database {
    /// Executes a mutating statement and returns the number of affected rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails to prepare or execute.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hotel::database::{Database, DatabaseConfig};
    /// use rusqlite::params;
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/hotels.db")).unwrap();
    /// let changed = db
    ///     .execute_update("UPDATE Rooms SET price = ?1 WHERE hotelID = ?2", params![175, 5])
    ///     .unwrap();
    /// ```
    pub fn execute_update<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
        log::debug!("execute: {}", sql.trim());
        Ok(self.conn.execute(sql, params)?)
    }

    /// Executes a query and returns every row as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails to prepare or execute.
    pub fn query_rows<P: Params>(&self, sql: &str, params: P) -> Result<QueryResult> {
        log::debug!("query: {}", sql.trim());
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let column_count = columns.len();

        let mut rows = stmt.query(params)?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let mut record = Vec::with_capacity(column_count);
            for idx in 0..column_count {
                record.push(value_to_text(row.get_ref(idx)?));
            }
            records.push(record);
        }

        Ok(QueryResult {
            columns,
            rows: records,
        })
    }

    /// Executes a query and returns only how many rows it produced.
    ///
    /// # Errors
    ///
    /// Returns an error if the statement fails to prepare or execute.
    pub fn query_count<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
        log::debug!("count: {}", sql.trim());
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut count = 0;
        while rows.next()?.is_some() {
            count += 1;
        }
        Ok(count)
    }
}
