// src/handlers/maintenance.rs
use crate::db::maintenance as store;
use crate::domain::payment::{CreatePaymentRequest, PaymentCreated, PaymentList};
use crate::errors::{ResultResp, ServerError};
use crate::handlers::read_json;
use crate::responses::{json_response, success_response};
use crate::router::AppState;
use astra::Request;
use chrono::Utc;
use tracing::info;

/// Existing clients expect the list wrapped as `{success, payments}`.
pub fn list(state: &AppState) -> ResultResp {
    let payments = state.db.with_conn(|conn| store::list_recent(conn, None))?;
    json_response(200, &PaymentList { success: true, payments })
}

pub fn create(mut req: Request, state: &AppState) -> ResultResp {
    let body: CreatePaymentRequest = read_json(&mut req, state.max_body_bytes)?;
    let new = body.validate()?;
    let payment = state.db.with_conn(|conn| store::insert(conn, &new, Utc::now()))?;
    info!(
        id = %payment.id,
        flat = %payment.flat_number,
        month = %payment.month,
        "payment recorded"
    );
    json_response(201, &PaymentCreated { success: true, payment })
}

pub fn delete(state: &AppState, id: &str) -> ResultResp {
    if !state.db.with_conn(|conn| store::delete(conn, id))? {
        return Err(ServerError::not_found("Payment"));
    }
    info!(id, "payment deleted");
    success_response()
}
