// src/domain/visitor.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{required, trimmed_or_default};
use crate::errors::ServerError;

/// A gate entry. `out_time` stays `None` until the guard checks the visitor out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub flat_number: String,
    pub purpose: String,
    pub in_time: DateTime<Utc>,
    pub out_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewVisitor {
    pub name: String,
    pub phone: String,
    pub flat_number: String,
    pub purpose: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVisitorRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub flat_number: Option<String>,
    pub purpose: Option<String>,
}

impl CreateVisitorRequest {
    pub fn validate(&self) -> Result<NewVisitor, ServerError> {
        Ok(NewVisitor {
            name: required(self.name.as_deref(), "name")?,
            phone: trimmed_or_default(self.phone.as_deref()),
            flat_number: trimmed_or_default(self.flat_number.as_deref()),
            purpose: trimmed_or_default(self.purpose.as_deref()),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub success: bool,
    pub visitor: Visitor,
}
