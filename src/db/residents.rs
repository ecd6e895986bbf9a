// src/db/residents.rs
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use super::{collect_rows, ids, to_millis, ts_col};
use crate::domain::resident::{Resident, ResidentUpsert};
use crate::errors::ServerError;

fn map_row(row: &Row<'_>) -> rusqlite::Result<Resident> {
    Ok(Resident {
        id: row.get(0)?,
        name: row.get(1)?,
        flat_number: row.get(2)?,
        created_at: ts_col(row, 3)?,
        updated_at: ts_col(row, 4)?,
    })
}

/// Insert a resident for the flat, or rename the existing one.
/// The flat number is the natural key.
pub fn upsert(
    conn: &Connection,
    input: &ResidentUpsert,
    now: DateTime<Utc>,
) -> Result<Resident, ServerError> {
    let ts = to_millis(now);

    conn.execute(
        r#"
        insert into residents (id, name, flat_number, created_at, updated_at)
        values (?, ?, ?, ?, ?)
        on conflict(flat_number) do update set
            name = excluded.name,
            updated_at = excluded.updated_at
        "#,
        params![ids::new_id(now), input.name, input.flat_number, ts, ts],
    )
    .map_err(|e| ServerError::DbError(format!("upsert resident failed: {e}")))?;

    conn.query_row(
        "select id, name, flat_number, created_at, updated_at from residents where flat_number = ?",
        params![input.flat_number],
        map_row,
    )
    .map_err(|e| ServerError::DbError(format!("load resident failed: {e}")))
}

pub fn list_all(conn: &Connection) -> Result<Vec<Resident>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select id, name, flat_number, created_at, updated_at
             from residents
             order by created_at desc, rowid desc",
        )
        .map_err(|e| ServerError::DbError(format!("prepare resident list failed: {e}")))?;

    let rows = stmt
        .query_map([], map_row)
        .map_err(|e| ServerError::DbError(format!("list residents failed: {e}")))?;

    collect_rows(rows, "resident")
}
