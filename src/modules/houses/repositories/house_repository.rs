use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::Result;
use crate::modules::houses::models::House;

/// Read-only access to house reference data.
///
/// Injected behind a trait so handlers and services never reach for a
/// global; tests substitute an in-memory implementation.
#[async_trait]
pub trait HouseStore: Send + Sync {
    /// All houses, ordered by id ascending
    async fn list(&self) -> Result<Vec<House>>;

    /// Single house by id
    async fn find_by_id(&self, id: &str) -> Result<Option<House>>;
}

/// PostgreSQL-backed house store
#[derive(Clone)]
pub struct PgHouseStore {
    pool: PgPool,
}

impl PgHouseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HouseStore for PgHouseStore {
    async fn list(&self) -> Result<Vec<House>> {
        let houses = sqlx::query_as::<_, House>(
            r#"
            SELECT id, name, rent_base, internet_base, water_unit_base,
                   electricity_unit_base, created_at
            FROM houses
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(houses)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<House>> {
        let house = sqlx::query_as::<_, House>(
            r#"
            SELECT id, name, rent_base, internet_base, water_unit_base,
                   electricity_unit_base, created_at
            FROM houses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(house)
    }
}
