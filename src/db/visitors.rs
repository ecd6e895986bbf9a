// src/db/visitors.rs
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{collect_rows, count_rows, ids, opt_ts_col, to_millis, ts_col};
use crate::domain::visitor::{NewVisitor, Visitor};
use crate::errors::ServerError;

const COLUMNS: &str =
    "id, name, phone, flat_number, purpose, in_time, out_time, created_at, updated_at";

fn map_row(row: &Row<'_>) -> rusqlite::Result<Visitor> {
    Ok(Visitor {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        flat_number: row.get(3)?,
        purpose: row.get(4)?,
        in_time: ts_col(row, 5)?,
        out_time: opt_ts_col(row, 6)?,
        created_at: ts_col(row, 7)?,
        updated_at: ts_col(row, 8)?,
    })
}

/// Log a visitor at the gate; `in_time` is the moment of insertion.
pub fn insert(
    conn: &Connection,
    new: &NewVisitor,
    now: DateTime<Utc>,
) -> Result<Visitor, ServerError> {
    let id = ids::new_id(now);
    let ts = to_millis(now);

    conn.execute(
        r#"
        insert into visitors
            (id, name, phone, flat_number, purpose, in_time, out_time, created_at, updated_at)
        values (?, ?, ?, ?, ?, ?, null, ?, ?)
        "#,
        params![id, new.name, new.phone, new.flat_number, new.purpose, ts, ts, ts],
    )
    .map_err(|e| ServerError::DbError(format!("insert visitor failed: {e}")))?;

    get(conn, &id)?.ok_or_else(|| ServerError::DbError("inserted visitor vanished".into()))
}

pub fn get(conn: &Connection, id: &str) -> Result<Option<Visitor>, ServerError> {
    conn.query_row(
        &format!("select {COLUMNS} from visitors where id = ?"),
        params![id],
        map_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("load visitor failed: {e}")))
}

/// Most recent arrivals first.
pub fn list_recent(conn: &Connection, limit: Option<u32>) -> Result<Vec<Visitor>, ServerError> {
    let mut stmt = conn
        .prepare(&format!(
            "select {COLUMNS} from visitors order by in_time desc, rowid desc limit ?"
        ))
        .map_err(|e| ServerError::DbError(format!("prepare visitor list failed: {e}")))?;

    let rows = stmt
        .query_map(params![limit.map(i64::from).unwrap_or(-1)], map_row)
        .map_err(|e| ServerError::DbError(format!("list visitors failed: {e}")))?;

    collect_rows(rows, "visitor")
}

/// Stamp `out_time`. Checking out twice moves the stamp forward.
pub fn checkout(
    conn: &Connection,
    id: &str,
    now: DateTime<Utc>,
) -> Result<Option<Visitor>, ServerError> {
    let ts = to_millis(now);
    let changed = conn
        .execute(
            "update visitors set out_time = ?, updated_at = ? where id = ?",
            params![ts, ts, id],
        )
        .map_err(|e| ServerError::DbError(format!("checkout visitor failed: {e}")))?;

    if changed == 0 {
        return Ok(None);
    }
    get(conn, id)
}

pub fn delete(conn: &Connection, id: &str) -> Result<bool, ServerError> {
    let removed = conn
        .execute("delete from visitors where id = ?", params![id])
        .map_err(|e| ServerError::DbError(format!("delete visitor failed: {e}")))?;
    Ok(removed > 0)
}

pub fn count(conn: &Connection) -> Result<i64, ServerError> {
    count_rows(conn, "visitors", None)
}
