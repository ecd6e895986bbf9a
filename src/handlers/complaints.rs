// src/handlers/complaints.rs
use crate::domain::complaint::{CreateComplaintRequest, StatusRequest, UpdateComplaintRequest};
use crate::errors::ResultResp;
use crate::handlers::{query_param, read_json};
use crate::responses::{json_response, success_response};
use crate::router::AppState;
use crate::services::complaints;
use astra::Request;
use chrono::Utc;

/// `GET /complaints[?status=...]`
pub fn list(req: &Request, state: &AppState) -> ResultResp {
    let status = query_param(req, "status");
    let list = state
        .db
        .with_conn(|conn| complaints::list(conn, status.as_deref()))?;
    json_response(200, &list)
}

/// `GET /complaints/{id}`
pub fn get(state: &AppState, id: &str) -> ResultResp {
    let complaint = state.db.with_conn(|conn| complaints::get(conn, id))?;
    json_response(200, &complaint)
}

/// `POST /complaints`
pub fn create(mut req: Request, state: &AppState) -> ResultResp {
    let body: CreateComplaintRequest = read_json(&mut req, state.max_body_bytes)?;
    let created = state
        .db
        .with_conn(|conn| complaints::create(conn, body, Utc::now()))?;
    json_response(201, &created)
}

/// `PUT /complaints/{id}`
pub fn update(mut req: Request, state: &AppState, id: &str) -> ResultResp {
    let body: UpdateComplaintRequest = read_json(&mut req, state.max_body_bytes)?;
    let updated = state
        .db
        .with_conn(|conn| complaints::update_full(conn, id, body, Utc::now()))?;
    json_response(200, &updated)
}

/// `PUT /complaints/{id}/status`
pub fn update_status(mut req: Request, state: &AppState, id: &str) -> ResultResp {
    let body: StatusRequest = read_json(&mut req, state.max_body_bytes)?;
    let updated = state
        .db
        .with_conn(|conn| complaints::update_status(conn, id, body, Utc::now()))?;
    json_response(200, &updated)
}

/// `DELETE /complaints/{id}`
pub fn delete(state: &AppState, id: &str) -> ResultResp {
    state.db.with_conn(|conn| complaints::delete(conn, id))?;
    success_response()
}
