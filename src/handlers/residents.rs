// src/handlers/residents.rs
use crate::db::residents as store;
use crate::domain::resident::ResidentRequest;
use crate::errors::ResultResp;
use crate::handlers::read_json;
use crate::responses::json_response;
use crate::router::AppState;
use astra::Request;
use chrono::Utc;
use tracing::info;

pub fn list(state: &AppState) -> ResultResp {
    let residents = state.db.with_conn(|conn| store::list_all(conn))?;
    json_response(200, &residents)
}

/// Create the resident for a flat, or rename the one already registered there.
pub fn upsert(mut req: Request, state: &AppState) -> ResultResp {
    let body: ResidentRequest = read_json(&mut req, state.max_body_bytes)?;
    let input = body.validate()?;
    let resident = state.db.with_conn(|conn| store::upsert(conn, &input, Utc::now()))?;
    info!(id = %resident.id, flat = %resident.flat_number, "resident saved");
    json_response(200, &resident)
}
