pub mod complaint;
pub mod notice;
pub mod payment;
pub mod resident;
pub mod sos;
pub mod visitor;

use crate::errors::ServerError;

/// Trimmed value of a required string field, or a `Validation` error naming it.
pub fn required(value: Option<&str>, field: &str) -> Result<String, ServerError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ServerError::Validation(format!("Missing required field: {field}")))
}

/// Trimmed value of an optional string field, empty when absent.
pub fn trimmed_or_default(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}
