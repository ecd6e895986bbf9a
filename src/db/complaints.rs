// src/db/complaints.rs
use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};

use super::{collect_rows, count_rows, ids, to_millis, ts_col};
use crate::domain::complaint::{Complaint, ComplaintPatch, ComplaintStatus, NewComplaint};
use crate::errors::ServerError;

const COLUMNS: &str =
    "id, name, flat_number, complaint_text, details, status, created_at, updated_at";

impl ToSql for ComplaintStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for ComplaintStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<Complaint> {
    Ok(Complaint {
        id: row.get(0)?,
        name: row.get(1)?,
        flat_number: row.get(2)?,
        complaint_text: row.get(3)?,
        details: row.get(4)?,
        status: row.get(5)?,
        created_at: ts_col(row, 6)?,
        updated_at: ts_col(row, 7)?,
    })
}

/// Persist a new complaint, assigning its id and both timestamps.
pub fn insert(
    conn: &Connection,
    new: &NewComplaint,
    now: DateTime<Utc>,
) -> Result<Complaint, ServerError> {
    let id = ids::new_id(now);
    let ts = to_millis(now);

    conn.execute(
        r#"
        insert into complaints
            (id, name, flat_number, complaint_text, details, status, created_at, updated_at)
        values (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            id,
            new.name,
            new.flat_number,
            new.complaint_text,
            new.details,
            new.status,
            ts,
            ts
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert complaint failed: {e}")))?;

    get(conn, &id)?.ok_or_else(|| ServerError::DbError("inserted complaint vanished".into()))
}

pub fn get(conn: &Connection, id: &str) -> Result<Option<Complaint>, ServerError> {
    conn.query_row(
        &format!("select {COLUMNS} from complaints where id = ?"),
        params![id],
        map_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("load complaint failed: {e}")))
}

/// All complaints, newest first.
pub fn list_all(conn: &Connection) -> Result<Vec<Complaint>, ServerError> {
    list_recent(conn, None)
}

/// Newest complaints first, optionally capped.
pub fn list_recent(conn: &Connection, limit: Option<u32>) -> Result<Vec<Complaint>, ServerError> {
    let mut stmt = conn
        .prepare(&format!(
            "select {COLUMNS} from complaints order by created_at desc, rowid desc limit ?"
        ))
        .map_err(|e| ServerError::DbError(format!("prepare complaint list failed: {e}")))?;

    // sqlite treats a negative limit as "no limit"
    let limit = limit.map(i64::from).unwrap_or(-1);
    let rows = stmt
        .query_map(params![limit], map_row)
        .map_err(|e| ServerError::DbError(format!("list complaints failed: {e}")))?;

    collect_rows(rows, "complaint")
}

/// Merge the patch into the stored complaint and refresh `updated_at`.
/// Returns `None` when the id does not resolve.
pub fn update(
    conn: &Connection,
    id: &str,
    patch: &ComplaintPatch,
    now: DateTime<Utc>,
) -> Result<Option<Complaint>, ServerError> {
    let changed = conn
        .execute(
            r#"
            update complaints set
                name           = coalesce(?, name),
                flat_number    = coalesce(?, flat_number),
                complaint_text = coalesce(?, complaint_text),
                details        = coalesce(?, details),
                status         = coalesce(?, status),
                updated_at     = ?
            where id = ?
            "#,
            params![
                patch.name,
                patch.flat_number,
                patch.complaint_text,
                patch.details,
                patch.status,
                to_millis(now),
                id
            ],
        )
        .map_err(|e| ServerError::DbError(format!("update complaint failed: {e}")))?;

    if changed == 0 {
        return Ok(None);
    }
    get(conn, id)
}

/// Physically remove a complaint. `true` if a row was deleted.
pub fn delete(conn: &Connection, id: &str) -> Result<bool, ServerError> {
    let removed = conn
        .execute("delete from complaints where id = ?", params![id])
        .map_err(|e| ServerError::DbError(format!("delete complaint failed: {e}")))?;
    Ok(removed > 0)
}

pub fn count(conn: &Connection, status: Option<ComplaintStatus>) -> Result<i64, ServerError> {
    count_rows(conn, "complaints", status.as_ref().map(ComplaintStatus::as_str))
}
