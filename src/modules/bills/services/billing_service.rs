use std::sync::Arc;

use crate::core::{AppError, BillingMonth, Result};
use crate::modules::bills::models::{Bill, CreateBillRequest, NewBill};
use crate::modules::bills::repositories::BillStore;
use crate::modules::bills::services::usage_calculator::UsageCalculator;
use crate::modules::houses::repositories::HouseStore;

/// Orchestrates bill computation and persistence.
///
/// Stores arrive injected so the same service runs against PostgreSQL in
/// production and in-memory doubles in tests.
pub struct BillingService {
    houses: Arc<dyn HouseStore>,
    bills: Arc<dyn BillStore>,
    calculator: UsageCalculator,
}

impl BillingService {
    pub fn new(houses: Arc<dyn HouseStore>, bills: Arc<dyn BillStore>) -> Self {
        Self {
            houses,
            bills,
            calculator: UsageCalculator::new(),
        }
    }

    /// All recorded bills, newest first
    pub async fn list_bills(&self) -> Result<Vec<Bill>> {
        self.bills.list().await
    }

    /// The bill for the month before `month`, if the house has one.
    ///
    /// Absence is a normal state (first billing cycle), never an error;
    /// store failures are.
    pub async fn previous_bill(
        &self,
        house_id: &str,
        month: BillingMonth,
    ) -> Result<Option<Bill>> {
        self.bills
            .find_by_house_and_month(house_id, month.previous())
            .await
    }

    /// Compute and persist the bill for one house and month.
    ///
    /// Charges derive from the previous cycle's readings (zero when none
    /// exist) and the house's per-unit rates. One durable write; the
    /// store's unique constraint settles concurrent duplicates.
    pub async fn create_bill(&self, house_id: &str, request: CreateBillRequest) -> Result<Bill> {
        let input = request.into_input()?;

        let house = self
            .houses
            .find_by_id(house_id)
            .await?
            .ok_or(AppError::InvalidHouseReference)?;

        let previous = self.previous_bill(house_id, input.billing_month).await?;
        let (previous_water, previous_electricity) =
            self.calculator.previous_readings(previous.as_ref());

        let water_usage =
            self.calculator
                .utility_amount(input.water, previous_water, house.water_rate()?)?;
        let electricity_usage = self.calculator.utility_amount(
            input.electricity,
            previous_electricity,
            house.electricity_rate()?,
        )?;
        let total = self.calculator.total(
            water_usage,
            electricity_usage,
            input.rent,
            input.internet,
        )?;

        tracing::debug!(
            house_id = %house_id,
            billing_month = %input.billing_month,
            %water_usage,
            %electricity_usage,
            %total,
            "Computed bill charges"
        );

        let bill = NewBill {
            house_id: house_id.to_string(),
            billing_month: input.billing_month,
            water_unit: input.water,
            water_usage,
            electricity_unit: input.electricity,
            electricity_usage,
            rent: input.rent,
            internet: input.internet,
            total,
        };

        self.bills.insert(bill).await
    }
}
