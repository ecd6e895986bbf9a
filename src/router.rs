use crate::db::Database;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{complaints, dashboard, maintenance, notices, residents, sos, visitors};
use crate::responses::{error_response, html_response};
use crate::templates;
use astra::{Body, Request, Response, ResponseBuilder};
use http::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use std::time::Instant;
use tracing::info;

/// Everything a handler needs besides the request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Database,
    pub max_body_bytes: usize,
}

/// Entry point used by the server loop: route, turn errors into `{error}`
/// responses, attach CORS headers and log the outcome.
pub fn dispatch(req: Request, state: &AppState) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut resp = handle(req, state).unwrap_or_else(error_response);
    apply_cors(&mut resp);

    info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    resp
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let full_path = req.uri().path().to_string();

    // `/api/complaints` and `/complaints` resolve to the same handlers.
    let path = match full_path.strip_prefix("/api") {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => full_path.as_str(),
    };
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("OPTIONS", _) => preflight(),
        ("GET", []) => html_response(templates::home_page()),

        ("GET", ["complaints"]) => complaints::list(&req, state),
        ("POST", ["complaints"]) => complaints::create(req, state),
        ("GET", ["complaints", id]) => complaints::get(state, id),
        ("PUT", ["complaints", id]) => complaints::update(req, state, id),
        ("PUT", ["complaints", id, "status"]) => complaints::update_status(req, state, id),
        ("DELETE", ["complaints", id]) => complaints::delete(state, id),

        ("GET", ["visitors"]) => visitors::list(state),
        ("POST", ["visitors"]) => visitors::create(req, state),
        ("PUT", ["visitors", id, "checkout"]) => visitors::checkout(state, id),
        ("DELETE", ["visitors", id]) => visitors::delete(state, id),

        ("GET", ["notices"]) => notices::list(state),
        ("POST", ["notices"]) => notices::create(req, state),
        ("DELETE", ["notices", id]) => notices::delete(state, id),

        ("GET", ["maintenance"]) => maintenance::list(state),
        ("POST", ["maintenance"]) => maintenance::create(req, state),
        ("DELETE", ["maintenance", id]) => maintenance::delete(state, id),

        ("GET", ["sos"]) => sos::list(state),
        ("POST", ["sos"]) => sos::create(req, state),
        ("PUT", ["sos", id, "status"]) => sos::update_status(req, state, id),
        ("DELETE", ["sos", id]) => sos::delete(state, id),

        ("GET", ["residents"]) => residents::list(state),
        ("POST", ["residents"]) => residents::upsert(req, state),

        ("GET", ["dashboard"]) => dashboard::summary(state),

        _ => Err(ServerError::NotFound("API route not found".into())),
    }
}

fn preflight() -> ResultResp {
    ResponseBuilder::new()
        .status(204)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

fn apply_cors(resp: &mut Response) {
    let headers = resp.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
}
