// src/handlers/mod.rs
//
// HTTP adapter: parse the request, call the store or service, shape the
// response. No business rules live here.

pub mod complaints;
pub mod dashboard;
pub mod maintenance;
pub mod notices;
pub mod residents;
pub mod sos;
pub mod visitors;

use crate::errors::ServerError;
use astra::Request;
use serde::de::DeserializeOwned;
use std::io::Read;

/// Read and decode a JSON body of at most `limit` bytes.
/// An empty body decodes as `{}` so every field comes through as absent.
pub fn read_json<T: DeserializeOwned>(req: &mut Request, limit: usize) -> Result<T, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read request body: {e}")))?;

    if buf.len() > limit {
        return Err(ServerError::PayloadTooLarge);
    }

    let bytes: &[u8] = if buf.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        &buf
    };

    serde_json::from_slice(bytes)
        .map_err(|e| ServerError::BadRequest(format!("Invalid JSON body: {e}")))
}

/// First non-empty value of a query-string parameter, percent-decoded.
pub fn query_param(req: &Request, key: &str) -> Option<String> {
    let query = req.uri().query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}
