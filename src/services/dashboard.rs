// src/services/dashboard.rs
//
// Read-only summary across every collection. A failing count or list
// degrades to 0 / [] so one bad table cannot blank the whole dashboard.

use rusqlite::Connection;
use serde::Serialize;
use tracing::warn;

use super::complaints::ComplaintView;
use crate::db;
use crate::domain::complaint::ComplaintStatus;
use crate::domain::notice::Notice;
use crate::domain::payment::Payment;
use crate::domain::sos::{SosAlert, SosStatus};
use crate::domain::visitor::Visitor;
use crate::errors::ServerError;

pub const RECENT_LIMIT: u32 = 5;

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Counts {
    pub visitors: i64,
    pub complaints: i64,
    pub pending_complaints: i64,
    pub sos: i64,
    pub pending_sos: i64,
    pub notices: i64,
    pub payments: i64,
}

#[derive(Debug, Default, Serialize)]
pub struct Recent {
    pub visitors: Vec<Visitor>,
    pub complaints: Vec<ComplaintView>,
    pub sos: Vec<SosAlert>,
    pub notices: Vec<Notice>,
    pub payments: Vec<Payment>,
}

#[derive(Debug, Default, Serialize)]
pub struct Dashboard {
    pub counts: Counts,
    pub recent: Recent,
}

fn or_default<T: Default>(what: &str, result: Result<T, ServerError>) -> T {
    result.unwrap_or_else(|e| {
        warn!(what, error = %e, "dashboard query failed, using default");
        T::default()
    })
}

pub fn summary(conn: &Connection) -> Dashboard {
    let counts = Counts {
        visitors: or_default("visitors count", db::visitors::count(conn)),
        complaints: or_default("complaints count", db::complaints::count(conn, None)),
        pending_complaints: or_default(
            "pending complaints count",
            db::complaints::count(conn, Some(ComplaintStatus::Pending)),
        ),
        sos: or_default("sos count", db::sos::count(conn, None)),
        pending_sos: or_default(
            "pending sos count",
            db::sos::count(conn, Some(SosStatus::Pending)),
        ),
        notices: or_default("notices count", db::notices::count(conn)),
        payments: or_default("payments count", db::maintenance::count(conn)),
    };

    let limit = Some(RECENT_LIMIT);
    let recent = Recent {
        visitors: or_default("recent visitors", db::visitors::list_recent(conn, limit)),
        complaints: or_default(
            "recent complaints",
            db::complaints::list_recent(conn, limit)
                .map(|list| list.into_iter().map(ComplaintView::from).collect()),
        ),
        sos: or_default("recent sos", db::sos::list_recent(conn, limit)),
        notices: or_default("recent notices", db::notices::list_recent(conn, limit)),
        payments: or_default("recent payments", db::maintenance::list_recent(conn, limit)),
    };

    Dashboard { counts, recent }
}
