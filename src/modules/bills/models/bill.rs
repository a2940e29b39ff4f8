use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::{AppError, BillingMonth, Result};

/// A finalized monthly bill.
///
/// `water_unit` / `electricity_unit` hold the raw meter readings at the end
/// of the cycle; `water_usage` / `electricity_usage` hold the derived
/// charges. Bills are write-once: a correction is a new record, never an
/// update.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bill {
    pub id: Uuid,
    pub house_id: String,
    pub billing_month: BillingMonth,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub water_unit: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub water_usage: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub electricity_unit: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub electricity_usage: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub rent: Decimal,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub internet: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
}

/// A bill's charges before persistence; the store assigns id and created_at
#[derive(Debug, Clone)]
pub struct NewBill {
    pub house_id: String,
    pub billing_month: BillingMonth,
    pub water_unit: Decimal,
    pub water_usage: Decimal,
    pub electricity_unit: Decimal,
    pub electricity_usage: Decimal,
    pub rent: Decimal,
    pub internet: Option<Decimal>,
    pub total: Decimal,
}

/// Payload for creating a bill: current meter readings plus the cycle's
/// fixed charges. Everything is optional at the serde level so missing
/// fields produce field-naming validation messages instead of a generic
/// deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBillRequest {
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub water: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub electricity: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub rent: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub internet: Option<Decimal>,
    #[serde(default)]
    pub billing_month: Option<String>,
}

/// A validated creation payload
#[derive(Debug, Clone)]
pub struct BillInput {
    pub water: Decimal,
    pub electricity: Decimal,
    pub rent: Decimal,
    pub internet: Option<Decimal>,
    pub billing_month: BillingMonth,
}

impl CreateBillRequest {
    /// Check required fields and parse the billing month.
    ///
    /// The month is checked first; its message text is part of the wire
    /// contract. An empty string counts as missing.
    pub fn into_input(self) -> Result<BillInput> {
        let billing_month = match self.billing_month.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => BillingMonth::parse(raw)?,
            _ => return Err(AppError::validation("billing_month is required")),
        };

        let water = self
            .water
            .ok_or_else(|| AppError::validation("water is required"))?;
        let electricity = self
            .electricity
            .ok_or_else(|| AppError::validation("electricity is required"))?;
        let rent = self
            .rent
            .ok_or_else(|| AppError::validation("rent is required"))?;

        Ok(BillInput {
            water,
            electricity,
            rent,
            internet: self.internet,
            billing_month,
        })
    }
}
