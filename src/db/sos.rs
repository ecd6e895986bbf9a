// src/db/sos.rs
use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};

use super::{collect_rows, count_rows, ids, to_millis, ts_col};
use crate::domain::sos::{NewSosAlert, SosAlert, SosPriority, SosStatus};
use crate::errors::ServerError;

const COLUMNS: &str =
    "id, name, flat_number, alert_type, details, status, priority, created_at, updated_at";

impl ToSql for SosStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for SosStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

impl ToSql for SosPriority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for SosPriority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<SosAlert> {
    Ok(SosAlert {
        id: row.get(0)?,
        name: row.get(1)?,
        flat_number: row.get(2)?,
        alert_type: row.get(3)?,
        details: row.get(4)?,
        status: row.get(5)?,
        priority: row.get(6)?,
        created_at: ts_col(row, 7)?,
        updated_at: ts_col(row, 8)?,
    })
}

pub fn insert(
    conn: &Connection,
    new: &NewSosAlert,
    now: DateTime<Utc>,
) -> Result<SosAlert, ServerError> {
    let id = ids::new_id(now);
    let ts = to_millis(now);

    conn.execute(
        r#"
        insert into sos_alerts
            (id, name, flat_number, alert_type, details, status, priority, created_at, updated_at)
        values (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            id,
            new.name,
            new.flat_number,
            new.alert_type,
            new.details,
            new.status,
            new.priority,
            ts,
            ts
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert sos failed: {e}")))?;

    get(conn, &id)?.ok_or_else(|| ServerError::DbError("inserted sos vanished".into()))
}

pub fn get(conn: &Connection, id: &str) -> Result<Option<SosAlert>, ServerError> {
    conn.query_row(
        &format!("select {COLUMNS} from sos_alerts where id = ?"),
        params![id],
        map_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("load sos failed: {e}")))
}

pub fn list_recent(conn: &Connection, limit: Option<u32>) -> Result<Vec<SosAlert>, ServerError> {
    let mut stmt = conn
        .prepare(&format!(
            "select {COLUMNS} from sos_alerts order by created_at desc, rowid desc limit ?"
        ))
        .map_err(|e| ServerError::DbError(format!("prepare sos list failed: {e}")))?;

    let rows = stmt
        .query_map(params![limit.map(i64::from).unwrap_or(-1)], map_row)
        .map_err(|e| ServerError::DbError(format!("list sos failed: {e}")))?;

    collect_rows(rows, "sos")
}

pub fn update_status(
    conn: &Connection,
    id: &str,
    status: SosStatus,
    now: DateTime<Utc>,
) -> Result<Option<SosAlert>, ServerError> {
    let changed = conn
        .execute(
            "update sos_alerts set status = ?, updated_at = ? where id = ?",
            params![status, to_millis(now), id],
        )
        .map_err(|e| ServerError::DbError(format!("update sos status failed: {e}")))?;

    if changed == 0 {
        return Ok(None);
    }
    get(conn, id)
}

pub fn delete(conn: &Connection, id: &str) -> Result<bool, ServerError> {
    let removed = conn
        .execute("delete from sos_alerts where id = ?", params![id])
        .map_err(|e| ServerError::DbError(format!("delete sos failed: {e}")))?;
    Ok(removed > 0)
}

pub fn count(conn: &Connection, status: Option<SosStatus>) -> Result<i64, ServerError> {
    count_rows(conn, "sos_alerts", status.as_ref().map(SosStatus::as_str))
}
