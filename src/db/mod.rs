pub mod complaints;
pub mod connection;
pub mod ids;
pub mod maintenance;
pub mod notices;
pub mod residents;
pub mod sos;
pub mod visitors;

pub use connection::{init_db, Database};

use chrono::{DateTime, Utc};
use rusqlite::Row;

use crate::errors::ServerError;

/// Timestamps are stored as Unix milliseconds.
pub(crate) fn to_millis(ts: DateTime<Utc>) -> i64 {
    ts.timestamp_millis()
}

/// Read a millisecond column back into a UTC timestamp.
pub(crate) fn ts_col(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let ms: i64 = row.get(idx)?;
    DateTime::from_timestamp_millis(ms).ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, ms))
}

pub(crate) fn opt_ts_col(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<DateTime<Utc>>> {
    let ms: Option<i64> = row.get(idx)?;
    ms.map(|ms| {
        DateTime::from_timestamp_millis(ms).ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, ms))
    })
    .transpose()
}

/// `select count(*)` over a table, optionally restricted to one status.
pub(crate) fn count_rows(
    conn: &rusqlite::Connection,
    table: &str,
    status: Option<&str>,
) -> Result<i64, ServerError> {
    let result = match status {
        Some(s) => conn.query_row(
            &format!("select count(*) from {table} where status = ?"),
            [s],
            |r| r.get(0),
        ),
        None => conn.query_row(&format!("select count(*) from {table}"), [], |r| r.get(0)),
    };
    result.map_err(|e| ServerError::DbError(format!("count {table} failed: {e}")))
}

/// Drain a `query_map` iterator, mapping row errors into `DbError`.
pub(crate) fn collect_rows<T, I>(rows: I, what: &str) -> Result<Vec<T>, ServerError>
where
    I: Iterator<Item = rusqlite::Result<T>>,
{
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(format!("read {what} row failed: {e}")))?);
    }
    Ok(out)
}
