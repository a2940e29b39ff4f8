// A house is reference data: created and edited by an administrative
// process outside this service. Billing only reads it, so there is no
// write path and no mutation API here.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{AppError, Result};

/// A billed housing unit with its fixed charges and per-unit rates.
///
/// The `id` doubles as the house number printed on receipts and may
/// contain spaces. Field names are the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct House {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub rent_base: Decimal,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub internet_base: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub water_unit_base: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub electricity_unit_base: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl House {
    /// Per-unit water rate.
    ///
    /// A house without one cannot be billed; that is a setup problem, not a
    /// caller mistake.
    pub fn water_rate(&self) -> Result<Decimal> {
        self.water_unit_base.ok_or_else(|| {
            AppError::configuration(format!("house {} has no water_unit_base", self.id))
        })
    }

    /// Per-unit electricity rate
    pub fn electricity_rate(&self) -> Result<Decimal> {
        self.electricity_unit_base.ok_or_else(|| {
            AppError::configuration(format!("house {} has no electricity_unit_base", self.id))
        })
    }
}
