use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::{AppError, BillingMonth, Result};
use crate::modules::bills::models::{Bill, NewBill};

/// Persistence for bills.
///
/// Bills are insert-only; the unique `(house_id, billing_month)` pair is
/// enforced by the store schema, not by the service.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// All bills, newest first
    async fn list(&self) -> Result<Vec<Bill>>;

    /// The unique bill for a house and month, if any
    async fn find_by_house_and_month(
        &self,
        house_id: &str,
        month: BillingMonth,
    ) -> Result<Option<Bill>>;

    /// Persist a new bill, returning it with generated id and timestamp
    async fn insert(&self, bill: NewBill) -> Result<Bill>;
}

/// PostgreSQL-backed bill store
#[derive(Clone)]
pub struct PgBillStore {
    pool: PgPool,
}

impl PgBillStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BillStore for PgBillStore {
    async fn list(&self) -> Result<Vec<Bill>> {
        let bills = sqlx::query_as::<_, Bill>(
            r#"
            SELECT id, house_id, billing_month, water_unit, water_usage,
                   electricity_unit, electricity_usage, rent, internet, total,
                   created_at
            FROM bills
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bills)
    }

    async fn find_by_house_and_month(
        &self,
        house_id: &str,
        month: BillingMonth,
    ) -> Result<Option<Bill>> {
        let bill = sqlx::query_as::<_, Bill>(
            r#"
            SELECT id, house_id, billing_month, water_unit, water_usage,
                   electricity_unit, electricity_usage, rent, internet, total,
                   created_at
            FROM bills
            WHERE house_id = $1 AND billing_month = $2
            "#,
        )
        .bind(house_id)
        .bind(month)
        .fetch_optional(&self.pool)
        .await?;

        Ok(bill)
    }

    async fn insert(&self, bill: NewBill) -> Result<Bill> {
        let created = sqlx::query_as::<_, Bill>(
            r#"
            INSERT INTO bills (
                house_id, billing_month, water_unit, water_usage,
                electricity_unit, electricity_usage, rent, internet, total
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, house_id, billing_month, water_unit, water_usage,
                      electricity_unit, electricity_usage, rent, internet,
                      total, created_at
            "#,
        )
        .bind(&bill.house_id)
        .bind(bill.billing_month)
        .bind(bill.water_unit)
        .bind(bill.water_usage)
        .bind(bill.electricity_unit)
        .bind(bill.electricity_usage)
        .bind(bill.rent)
        .bind(bill.internet)
        .bind(bill.total)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return AppError::InvalidHouseReference;
                }
                if db_err.is_unique_violation() {
                    return AppError::validation(db_err.message().to_string());
                }
            }
            AppError::Database(e)
        })?;

        Ok(created)
    }
}
