use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::error::AppError;

/// Calendar-month key for bills, normalized to the first day of the month.
///
/// Clients send the month in several shapes (`2024-06`, `2024-06-01`, or a
/// full RFC 3339 timestamp); all of them collapse to the same key. Stored
/// and serialized as the month's first day.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    sqlx::Type,
)]
#[sqlx(transparent)]
#[serde(transparent)]
pub struct BillingMonth(NaiveDate);

impl BillingMonth {
    /// Normalize an arbitrary date to its month key
    pub fn from_date(date: NaiveDate) -> Self {
        let first = date.with_day(1).expect("day 1 exists in every month");
        BillingMonth(first)
    }

    /// Parse a client-supplied billing month.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY-MM`, and RFC 3339 timestamps, with the
    /// year bounded to 1900-9999. Anything else is a validation failure;
    /// chrono's extreme years would otherwise break month arithmetic.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let raw = input.trim();

        let date = DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"))
            .ok()
            .filter(|date| (1900..=9999).contains(&date.year()))
            .ok_or_else(|| AppError::validation(format!("invalid billing_month: {input}")))?;

        Ok(Self::from_date(date))
    }

    /// The month immediately before this one
    pub fn previous(&self) -> Self {
        let shifted = self
            .0
            .checked_sub_months(Months::new(1))
            .expect("months with years in 1900-9999 have an in-range predecessor");
        BillingMonth(shifted)
    }

    /// First day of the month, for store bindings
    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// English month name for receipt headers, e.g. `June`
    pub fn month_label(&self) -> String {
        self.0.format("%B").to_string()
    }

    /// Four-digit year for receipt headers, e.g. `2024`
    pub fn year_label(&self) -> String {
        self.0.format("%Y").to_string()
    }
}

impl fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

impl FromStr for BillingMonth {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
