// src/db/maintenance.rs
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use super::{collect_rows, count_rows, ids, to_millis, ts_col};
use crate::domain::payment::{NewPayment, Payment};
use crate::errors::ServerError;

fn map_row(row: &Row<'_>) -> rusqlite::Result<Payment> {
    Ok(Payment {
        id: row.get(0)?,
        name: row.get(1)?,
        flat_number: row.get(2)?,
        month: row.get(3)?,
        amount: row.get(4)?,
        payment_mode: row.get(5)?,
        status: row.get(6)?,
        date: ts_col(row, 7)?,
    })
}

/// Record a payment dated `now`.
pub fn insert(
    conn: &Connection,
    new: &NewPayment,
    now: DateTime<Utc>,
) -> Result<Payment, ServerError> {
    let payment = Payment {
        id: ids::new_id(now),
        name: new.name.clone(),
        flat_number: new.flat_number.clone(),
        month: new.month.clone(),
        amount: new.amount,
        payment_mode: new.payment_mode.clone(),
        status: new.status.clone(),
        date: now,
    };

    conn.execute(
        r#"
        insert into maintenance_payments
            (id, name, flat_number, month, amount, payment_mode, status, paid_at)
        values (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            payment.id,
            payment.name,
            payment.flat_number,
            payment.month,
            payment.amount,
            payment.payment_mode,
            payment.status,
            to_millis(now)
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert payment failed: {e}")))?;

    Ok(payment)
}

/// Latest payments first.
pub fn list_recent(conn: &Connection, limit: Option<u32>) -> Result<Vec<Payment>, ServerError> {
    let mut stmt = conn
        .prepare(
            "select id, name, flat_number, month, amount, payment_mode, status, paid_at
             from maintenance_payments
             order by paid_at desc, rowid desc
             limit ?",
        )
        .map_err(|e| ServerError::DbError(format!("prepare payment list failed: {e}")))?;

    let rows = stmt
        .query_map(params![limit.map(i64::from).unwrap_or(-1)], map_row)
        .map_err(|e| ServerError::DbError(format!("list payments failed: {e}")))?;

    collect_rows(rows, "payment")
}

pub fn delete(conn: &Connection, id: &str) -> Result<bool, ServerError> {
    let removed = conn
        .execute("delete from maintenance_payments where id = ?", params![id])
        .map_err(|e| ServerError::DbError(format!("delete payment failed: {e}")))?;
    Ok(removed > 0)
}

pub fn count(conn: &Connection) -> Result<i64, ServerError> {
    count_rows(conn, "maintenance_payments", None)
}
