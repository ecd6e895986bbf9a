use crate::errors::ResultResp;
use crate::responses::json_response;
use crate::router::AppState;
use crate::services::dashboard;

/// `GET /dashboard`
pub fn summary(state: &AppState) -> ResultResp {
    let summary = state.db.with_conn(|conn| Ok(dashboard::summary(conn)))?;
    json_response(200, &summary)
}
