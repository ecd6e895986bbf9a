use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;
use tracing::error;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Convert a ServerError into a `{error}` JSON response.
/// Store and internal failures are logged in full but reported generically.
pub fn error_response(err: ServerError) -> Response {
    let status = err.status_code();
    let message = match &err {
        ServerError::DbError(detail) => {
            error!(%detail, "store failure");
            "Server error".to_string()
        }
        ServerError::InternalError => {
            error!("internal error while handling request");
            "Server error".to_string()
        }
        other => other.to_string(),
    };

    let body = serde_json::to_vec(&ErrorBody { error: &message })
        .unwrap_or_else(|_| br#"{"error":"Server error"}"#.to_vec());

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Server error")))
}
