// src/domain/resident.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::required;
use crate::errors::ServerError;

/// One resident per flat; re-registering a flat replaces the name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub flat_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResidentUpsert {
    pub name: String,
    pub flat_number: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentRequest {
    pub name: Option<String>,
    pub flat_number: Option<String>,
}

impl ResidentRequest {
    pub fn validate(&self) -> Result<ResidentUpsert, ServerError> {
        Ok(ResidentUpsert {
            name: required(self.name.as_deref(), "name")?,
            flat_number: required(self.flat_number.as_deref(), "flatNumber")?,
        })
    }
}
