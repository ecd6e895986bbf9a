// src/domain/sos.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{required, trimmed_or_default};
use crate::errors::ServerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SosStatus {
    #[default]
    Pending,
    Acknowledged,
    Resolved,
}

impl SosStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SosStatus::Pending => "Pending",
            SosStatus::Acknowledged => "Acknowledged",
            SosStatus::Resolved => "Resolved",
        }
    }
}

impl FromStr for SosStatus {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(SosStatus::Pending),
            "Acknowledged" => Ok(SosStatus::Acknowledged),
            "Resolved" => Ok(SosStatus::Resolved),
            other => Err(ServerError::Validation(format!("Invalid SOS status '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SosPriority {
    #[default]
    Normal,
    High,
}

impl SosPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            SosPriority::Normal => "Normal",
            SosPriority::High => "High",
        }
    }
}

impl FromStr for SosPriority {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Normal" => Ok(SosPriority::Normal),
            "High" => Ok(SosPriority::High),
            other => Err(ServerError::Validation(format!("Invalid SOS priority '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SosAlert {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub flat_number: String,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub details: String,
    pub status: SosStatus,
    pub priority: SosPriority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSosAlert {
    pub name: String,
    pub flat_number: String,
    pub alert_type: String,
    pub details: String,
    pub status: SosStatus,
    pub priority: SosPriority,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSosRequest {
    pub name: Option<String>,
    pub flat_number: Option<String>,
    #[serde(rename = "type")]
    pub alert_type: Option<String>,
    pub details: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// Empty or absent means "use the default".
fn parse_or_default<T: FromStr<Err = ServerError> + Default>(
    value: Option<&str>,
) -> Result<T, ServerError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.parse(),
        None => Ok(T::default()),
    }
}

impl CreateSosRequest {
    pub fn validate(&self) -> Result<NewSosAlert, ServerError> {
        let alert_type = trimmed_or_default(self.alert_type.as_deref());
        Ok(NewSosAlert {
            name: required(self.name.as_deref(), "name")?,
            flat_number: required(self.flat_number.as_deref(), "flatNumber")?,
            details: required(self.details.as_deref(), "details")?,
            alert_type: if alert_type.is_empty() { "Other".into() } else { alert_type },
            status: parse_or_default(self.status.as_deref())?,
            priority: parse_or_default(self.priority.as_deref())?,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SosStatusRequest {
    pub status: Option<String>,
}

impl SosStatusRequest {
    pub fn validate(&self) -> Result<SosStatus, ServerError> {
        match self.status.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => s.parse(),
            None => Err(ServerError::Validation("Missing status".into())),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SosUpdated {
    pub success: bool,
    pub sos: SosAlert,
}
