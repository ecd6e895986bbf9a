// errors.rs
use astra::Response;
use thiserror::Error;

/// Errors originating from either the request layer
/// (routing, bad input, missing records) or downstream layers (DB).
#[derive(Debug, Error)]
pub enum ServerError {
    /// A required field is missing/empty or a value is outside its enum.
    #[error("{0}")]
    Validation(String),
    /// The request itself could not be parsed.
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("Database error: {0}")]
    DbError(String),
    #[error("Internal server error")]
    InternalError,
}

impl ServerError {
    pub fn not_found(what: &str) -> Self {
        ServerError::NotFound(format!("{what} not found"))
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ServerError::Validation(_) | ServerError::BadRequest(_) => 400,
            ServerError::NotFound(_) => 404,
            ServerError::PayloadTooLarge => 413,
            ServerError::DbError(_) | ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
