// src/handlers/notices.rs
use crate::db::notices as store;
use crate::domain::notice::CreateNoticeRequest;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::read_json;
use crate::responses::{json_response, success_response};
use crate::router::AppState;
use astra::Request;
use chrono::Utc;
use tracing::info;

pub fn list(state: &AppState) -> ResultResp {
    let notices = state.db.with_conn(|conn| store::list_recent(conn, None))?;
    json_response(200, &notices)
}

pub fn create(mut req: Request, state: &AppState) -> ResultResp {
    let body: CreateNoticeRequest = read_json(&mut req, state.max_body_bytes)?;
    let new = body.validate()?;
    let saved = state.db.with_conn(|conn| store::insert(conn, &new, Utc::now()))?;
    info!(id = %saved.id, "notice posted");
    json_response(201, &saved)
}

pub fn delete(state: &AppState, id: &str) -> ResultResp {
    if !state.db.with_conn(|conn| store::delete(conn, id))? {
        return Err(ServerError::not_found("Notice"));
    }
    info!(id, "notice deleted");
    success_response()
}
