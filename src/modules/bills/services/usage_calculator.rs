use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::bills::models::Bill;

/// Derives a cycle's charges from meter readings and per-unit rates.
///
/// No rounding happens here; presentation formatting belongs to the
/// receipt layer.
pub struct UsageCalculator;

impl UsageCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Meter readings carried forward from the previous cycle.
    ///
    /// A house with no billing history starts from zero.
    pub fn previous_readings(&self, previous: Option<&Bill>) -> (Decimal, Decimal) {
        match previous {
            Some(bill) => (bill.water_unit, bill.electricity_unit),
            None => (Decimal::ZERO, Decimal::ZERO),
        }
    }

    /// Charge for one utility: (current - previous) * rate.
    ///
    /// A reading below the previous one yields a negative charge. Meter
    /// resets are surfaced to the operator, not clamped away. Readings
    /// large enough to overflow the arithmetic are rejected.
    pub fn utility_amount(
        &self,
        current: Decimal,
        previous: Decimal,
        rate: Decimal,
    ) -> Result<Decimal> {
        current
            .checked_sub(previous)
            .and_then(|units| units.checked_mul(rate))
            .ok_or_else(|| AppError::validation("reading out of range"))
    }

    /// Grand total for the cycle; a house without internet service
    /// contributes zero for it
    pub fn total(
        &self,
        water_amount: Decimal,
        electricity_amount: Decimal,
        rent: Decimal,
        internet: Option<Decimal>,
    ) -> Result<Decimal> {
        water_amount
            .checked_add(electricity_amount)
            .and_then(|sum| sum.checked_add(rent))
            .and_then(|sum| sum.checked_add(internet.unwrap_or(Decimal::ZERO)))
            .ok_or_else(|| AppError::validation("total out of range"))
    }
}

impl Default for UsageCalculator {
    fn default() -> Self {
        Self::new()
    }
}
