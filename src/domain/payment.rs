// src/domain/payment.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{required, trimmed_or_default};
use crate::errors::ServerError;

/// A maintenance payment recorded against a flat for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub flat_number: String,
    pub month: String,
    pub amount: f64,
    pub payment_mode: String,
    pub status: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub name: String,
    pub flat_number: String,
    pub month: String,
    pub amount: f64,
    pub payment_mode: String,
    pub status: String,
}

/// Clients send the amount either as a JSON number or as the raw form string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    fn value(&self) -> Option<f64> {
        match self {
            AmountInput::Number(n) => Some(*n),
            AmountInput::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub name: Option<String>,
    pub flat_number: Option<String>,
    pub month: Option<String>,
    pub amount: Option<AmountInput>,
    pub payment_mode: Option<String>,
    pub status: Option<String>,
}

impl CreatePaymentRequest {
    pub fn validate(&self) -> Result<NewPayment, ServerError> {
        let name = required(self.name.as_deref(), "name")?;
        let flat_number = required(self.flat_number.as_deref(), "flatNumber")?;
        let month = required(self.month.as_deref(), "month")?;

        let amount = self
            .amount
            .as_ref()
            .ok_or_else(|| ServerError::Validation("Missing required field: amount".into()))?
            .value()
            .filter(|a| a.is_finite() && *a >= 0.0)
            .ok_or_else(|| ServerError::Validation("amount must be a non-negative number".into()))?;

        let mode = trimmed_or_default(self.payment_mode.as_deref());
        let status = trimmed_or_default(self.status.as_deref());

        Ok(NewPayment {
            name,
            flat_number,
            month,
            amount,
            payment_mode: if mode.is_empty() { "Online".into() } else { mode },
            status: if status.is_empty() { "Paid".into() } else { status },
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PaymentList {
    pub success: bool,
    pub payments: Vec<Payment>,
}

#[derive(Debug, Serialize)]
pub struct PaymentCreated {
    pub success: bool,
    pub payment: Payment,
}
