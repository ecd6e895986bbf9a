// src/db/notices.rs
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use super::{collect_rows, count_rows, ids, to_millis, ts_col};
use crate::domain::notice::{NewNotice, Notice};
use crate::errors::ServerError;

fn map_row(row: &Row<'_>) -> rusqlite::Result<Notice> {
    Ok(Notice {
        id: row.get(0)?,
        title: row.get(1)?,
        message: row.get(2)?,
        created_at: ts_col(row, 3)?,
        updated_at: ts_col(row, 4)?,
    })
}

pub fn insert(
    conn: &Connection,
    new: &NewNotice,
    now: DateTime<Utc>,
) -> Result<Notice, ServerError> {
    let notice = Notice {
        id: ids::new_id(now),
        title: new.title.clone(),
        message: new.message.clone(),
        created_at: now,
        updated_at: now,
    };

    conn.execute(
        "insert into notices (id, title, message, created_at, updated_at) values (?, ?, ?, ?, ?)",
        params![
            notice.id,
            notice.title,
            notice.message,
            to_millis(now),
            to_millis(now)
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert notice failed: {e}")))?;

    Ok(notice)
}

pub fn list_recent(conn: &Connection, limit: Option<u32>) -> Result<Vec<Notice>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select id, title, message, created_at, updated_at
             from notices
             order by created_at desc, rowid desc
             limit ?",
        )
        .map_err(|e| ServerError::DbError(format!("prepare notice list failed: {e}")))?;

    let rows = stmt
        .query_map(params![limit.map(i64::from).unwrap_or(-1)], map_row)
        .map_err(|e| ServerError::DbError(format!("list notices failed: {e}")))?;

    collect_rows(rows, "notice")
}

pub fn delete(conn: &Connection, id: &str) -> Result<bool, ServerError> {
    let removed = conn
        .execute("delete from notices where id = ?", params![id])
        .map_err(|e| ServerError::DbError(format!("delete notice failed: {e}")))?;
    Ok(removed > 0)
}

pub fn count(conn: &Connection) -> Result<i64, ServerError> {
    count_rows(conn, "notices", None)
}
