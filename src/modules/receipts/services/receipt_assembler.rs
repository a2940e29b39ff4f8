use rust_decimal::Decimal;

use crate::core::Result;
use crate::modules::bills::models::Bill;
use crate::modules::bills::services::UsageCalculator;
use crate::modules::houses::models::House;
use crate::modules::receipts::models::{Receipt, ReceiptItem};

/// Line labels fixed by the receipt template
const WATER_LABEL: &str = "ค่าน้ำ";
const ELECTRICITY_LABEL: &str = "ค่าไฟ";

/// Shapes a bill into the printable receipt document.
///
/// Pure data-shaping, no I/O. Presentation rounding happens here and
/// nowhere earlier: money gets two decimals, meter readings keep their
/// recorded precision.
pub struct ReceiptAssembler {
    calculator: UsageCalculator,
}

impl ReceiptAssembler {
    pub fn new() -> Self {
        Self {
            calculator: UsageCalculator::new(),
        }
    }

    /// Build the receipt for a bill.
    ///
    /// `previous` is the bill the charges were derived from; a first cycle
    /// passes `None` and shows zero previous readings. Unit prices come
    /// from the house rates.
    pub fn assemble(&self, house: &House, bill: &Bill, previous: Option<&Bill>) -> Result<Receipt> {
        let (previous_water, previous_electricity) = self.calculator.previous_readings(previous);

        let items = vec![
            line_item(
                WATER_LABEL,
                previous_water,
                bill.water_unit,
                house.water_rate()?,
                bill.water_usage,
            ),
            line_item(
                ELECTRICITY_LABEL,
                previous_electricity,
                bill.electricity_unit,
                house.electricity_rate()?,
                bill.electricity_usage,
            ),
        ];

        Ok(Receipt {
            house_number: house.id.clone(),
            month: bill.billing_month.month_label(),
            year: bill.billing_month.year_label(),
            items,
            internet: format_money(bill.internet.unwrap_or(Decimal::ZERO)),
            house_rent: format_money(bill.rent),
            total: format_money(bill.total),
        })
    }
}

impl Default for ReceiptAssembler {
    fn default() -> Self {
        Self::new()
    }
}

fn line_item(
    name: &str,
    previous: Decimal,
    current: Decimal,
    price: Decimal,
    amount: Decimal,
) -> ReceiptItem {
    ReceiptItem {
        name: name.to_string(),
        previous: format_reading(previous),
        current: format_reading(current),
        units: format_reading(current - previous),
        price: format_money(price),
        amount: format_money(amount),
    }
}

fn format_money(value: Decimal) -> String {
    format!("{:.2}", value)
}

fn format_reading(value: Decimal) -> String {
    value.normalize().to_string()
}
