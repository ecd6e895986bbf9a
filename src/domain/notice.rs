// src/domain/notice.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::required;
use crate::errors::ServerError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewNotice {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNoticeRequest {
    pub title: Option<String>,
    pub message: Option<String>,
}

impl CreateNoticeRequest {
    pub fn validate(&self) -> Result<NewNotice, ServerError> {
        Ok(NewNotice {
            title: required(self.title.as_deref(), "title")?,
            message: required(self.message.as_deref(), "message")?,
        })
    }
}
