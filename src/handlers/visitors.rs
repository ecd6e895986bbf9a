// src/handlers/visitors.rs
use crate::db::visitors as store;
use crate::domain::visitor::{CheckoutResponse, CreateVisitorRequest};
use crate::errors::{ResultResp, ServerError};
use crate::handlers::read_json;
use crate::responses::{json_response, success_response};
use crate::router::AppState;
use astra::Request;
use chrono::Utc;
use tracing::info;

pub fn list(state: &AppState) -> ResultResp {
    let visitors = state.db.with_conn(|conn| store::list_recent(conn, None))?;
    json_response(200, &visitors)
}

pub fn create(mut req: Request, state: &AppState) -> ResultResp {
    let body: CreateVisitorRequest = read_json(&mut req, state.max_body_bytes)?;
    let new = body.validate()?;
    let saved = state.db.with_conn(|conn| store::insert(conn, &new, Utc::now()))?;
    info!(id = %saved.id, flat = %saved.flat_number, "visitor logged");
    json_response(201, &saved)
}

pub fn checkout(state: &AppState, id: &str) -> ResultResp {
    let visitor = state
        .db
        .with_conn(|conn| store::checkout(conn, id, Utc::now()))?
        .ok_or_else(|| ServerError::not_found("Visitor"))?;
    info!(id, "visitor checked out");
    json_response(200, &CheckoutResponse { success: true, visitor })
}

pub fn delete(state: &AppState, id: &str) -> ResultResp {
    if !state.db.with_conn(|conn| store::delete(conn, id))? {
        return Err(ServerError::not_found("Visitor"));
    }
    info!(id, "visitor deleted");
    success_response()
}
