// src/handlers/sos.rs
use crate::db::sos as store;
use crate::domain::sos::{CreateSosRequest, SosStatusRequest, SosUpdated};
use crate::errors::{ResultResp, ServerError};
use crate::handlers::read_json;
use crate::responses::{json_response, success_response};
use crate::router::AppState;
use astra::Request;
use chrono::Utc;
use tracing::{info, warn};

pub fn list(state: &AppState) -> ResultResp {
    let alerts = state.db.with_conn(|conn| store::list_recent(conn, None))?;
    json_response(200, &alerts)
}

pub fn create(mut req: Request, state: &AppState) -> ResultResp {
    let body: CreateSosRequest = read_json(&mut req, state.max_body_bytes)?;
    let new = body.validate()?;
    let saved = state.db.with_conn(|conn| store::insert(conn, &new, Utc::now()))?;
    warn!(
        id = %saved.id,
        flat = %saved.flat_number,
        kind = %saved.alert_type,
        priority = saved.priority.as_str(),
        "SOS raised"
    );
    json_response(201, &saved)
}

pub fn update_status(mut req: Request, state: &AppState, id: &str) -> ResultResp {
    let body: SosStatusRequest = read_json(&mut req, state.max_body_bytes)?;
    let status = body.validate()?;
    let sos = state
        .db
        .with_conn(|conn| store::update_status(conn, id, status, Utc::now()))?
        .ok_or_else(|| ServerError::not_found("SOS alert"))?;
    info!(id, status = status.as_str(), "SOS status updated");
    json_response(200, &SosUpdated { success: true, sos })
}

pub fn delete(state: &AppState, id: &str) -> ResultResp {
    if !state.db.with_conn(|conn| store::delete(conn, id))? {
        return Err(ServerError::not_found("SOS alert"));
    }
    info!(id, "SOS deleted");
    success_response()
}
