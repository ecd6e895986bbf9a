// src/services/complaints.rs
//
// The only writer of complaint business rules. Handlers parse requests and
// call in here; the store never sees unvalidated input.

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use serde::Serialize;
use tracing::info;

use crate::db::complaints as store;
use crate::domain::complaint::{
    Complaint, ComplaintPatch, ComplaintStatus, CreateComplaintRequest, NewComplaint,
    StatusRequest, UpdateComplaintRequest,
};
use crate::domain::required;
use crate::errors::ServerError;

/// The single complaint body derived from the two legacy fields.
/// `details` wins whenever it has non-blank content.
pub fn canonical_text(details: Option<&str>, complaint_text: Option<&str>) -> String {
    [details, complaint_text]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|t| !t.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// A complaint as returned to clients: the stored record plus its canonical text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplaintView {
    #[serde(flatten)]
    pub complaint: Complaint,
    pub text: String,
}

impl From<Complaint> for ComplaintView {
    fn from(complaint: Complaint) -> Self {
        let text = canonical_text(
            complaint.details.as_deref(),
            complaint.complaint_text.as_deref(),
        );
        Self { complaint, text }
    }
}

/// Absent or blank status falls back to `Pending`; anything else must be in the enum.
fn status_or_default(raw: Option<&str>) -> Result<ComplaintStatus, ServerError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.parse(),
        None => Ok(ComplaintStatus::default()),
    }
}

fn trim_opt(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

/// Validate and normalise a creation request. Nothing is written on failure.
pub fn validate_new(req: CreateComplaintRequest) -> Result<NewComplaint, ServerError> {
    let name = required(req.name.as_deref(), "name")?;
    let flat_number = required(req.flat_number.as_deref(), "flatNumber")?;

    if canonical_text(req.details.as_deref(), req.complaint_text.as_deref()).is_empty() {
        return Err(ServerError::Validation(
            "Missing required field: details or complaintText".into(),
        ));
    }

    Ok(NewComplaint {
        name,
        flat_number,
        complaint_text: trim_opt(req.complaint_text),
        details: trim_opt(req.details),
        status: status_or_default(req.status.as_deref())?,
    })
}

pub fn create(
    conn: &Connection,
    req: CreateComplaintRequest,
    now: DateTime<Utc>,
) -> Result<ComplaintView, ServerError> {
    let new = validate_new(req)?;
    let saved = store::insert(conn, &new, now)?;
    info!(id = %saved.id, flat = %saved.flat_number, "complaint created");
    Ok(saved.into())
}

/// Every complaint, newest first, optionally restricted to one status.
pub fn list(conn: &Connection, status: Option<&str>) -> Result<Vec<ComplaintView>, ServerError> {
    let filter = status.map(str::parse::<ComplaintStatus>).transpose()?;

    Ok(store::list_all(conn)?
        .into_iter()
        .filter(|c| filter.map_or(true, |s| c.status == s))
        .map(ComplaintView::from)
        .collect())
}

pub fn get(conn: &Connection, id: &str) -> Result<ComplaintView, ServerError> {
    store::get(conn, id)?
        .map(ComplaintView::from)
        .ok_or_else(|| ServerError::not_found("Complaint"))
}

/// Merge any subset of fields. Strings are trimmed; the canonical-text
/// requirement from `create` is deliberately not re-checked here.
pub fn update_full(
    conn: &Connection,
    id: &str,
    req: UpdateComplaintRequest,
    now: DateTime<Utc>,
) -> Result<ComplaintView, ServerError> {
    let status = req
        .status
        .as_deref()
        .map(|s| s.trim().parse::<ComplaintStatus>())
        .transpose()?;

    let patch = ComplaintPatch {
        name: trim_opt(req.name),
        flat_number: trim_opt(req.flat_number),
        complaint_text: trim_opt(req.complaint_text),
        details: trim_opt(req.details),
        status,
    };

    let updated = store::update(conn, id, &patch, now)?
        .ok_or_else(|| ServerError::not_found("Complaint"))?;
    info!(id, "complaint updated");
    Ok(updated.into())
}

/// Status-only mutation used by guards. Any of the three states may follow any other.
pub fn update_status(
    conn: &Connection,
    id: &str,
    req: StatusRequest,
    now: DateTime<Utc>,
) -> Result<ComplaintView, ServerError> {
    let status: ComplaintStatus = match req.status.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => s.parse()?,
        _ => return Err(ServerError::Validation("Status is required".into())),
    };

    let patch = ComplaintPatch {
        status: Some(status),
        ..Default::default()
    };

    let updated = store::update(conn, id, &patch, now)?
        .ok_or_else(|| ServerError::not_found("Complaint"))?;
    info!(id, %status, "complaint status updated");
    Ok(updated.into())
}

pub fn delete(conn: &Connection, id: &str) -> Result<(), ServerError> {
    if !store::delete(conn, id)? {
        return Err(ServerError::not_found("Complaint"));
    }
    info!(id, "complaint deleted");
    Ok(())
}
