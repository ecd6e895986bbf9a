// src/domain/complaint.rs

use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle marker of a complaint. Any status may move to any other;
/// only membership in the enum is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ComplaintStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 3] = [Self::Pending, Self::InProgress, Self::Resolved];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                ServerError::Validation(format!(
                    "Invalid status '{s}': expected one of Pending, In Progress, Resolved"
                ))
            })
    }
}

/// A complaint as persisted. Both legacy body fields are kept verbatim so
/// readers relying on either name keep working.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub flat_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complaint_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated fields for a brand new complaint.
#[derive(Debug, Clone, PartialEq)]
pub struct NewComplaint {
    pub name: String,
    pub flat_number: String,
    pub complaint_text: Option<String>,
    pub details: Option<String>,
    pub status: ComplaintStatus,
}

/// Fields to merge into an existing complaint. `None` leaves a column alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplaintPatch {
    pub name: Option<String>,
    pub flat_number: Option<String>,
    pub complaint_text: Option<String>,
    pub details: Option<String>,
    pub status: Option<ComplaintStatus>,
}

// === Wire shapes ===
// Field names must stay exactly as existing clients send them.

/// `POST /complaints` body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComplaintRequest {
    pub name: Option<String>,
    pub flat_number: Option<String>,
    pub details: Option<String>,
    pub complaint_text: Option<String>,
    pub status: Option<String>,
}

/// `PUT /complaints/{id}` body: any subset of the fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComplaintRequest {
    pub name: Option<String>,
    pub flat_number: Option<String>,
    pub details: Option<String>,
    pub complaint_text: Option<String>,
    pub status: Option<String>,
}

/// `PUT /complaints/{id}/status` body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusRequest {
    pub status: Option<String>,
}
