use crate::domain::{models::offering::Offering, ports::OfferingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresOfferingRepo {
    pool: PgPool,
}

impl PostgresOfferingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OfferingRepository for PostgresOfferingRepo {
    async fn create(&self, offering: &Offering) -> Result<Offering, AppError> {
        sqlx::query_as::<_, Offering>(
            "INSERT INTO offerings (id, name, description, duration_minutes, price_cents, active, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
        .bind(&offering.id)
        .bind(&offering.name)
        .bind(&offering.description)
        .bind(offering.duration_minutes)
        .bind(offering.price_cents)
        .bind(offering.active)
        .bind(offering.created_at)
        .bind(offering.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Offering>, AppError> {
        sqlx::query_as::<_, Offering>("SELECT * FROM offerings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_active(&self) -> Result<Vec<Offering>, AppError> {
        sqlx::query_as::<_, Offering>("SELECT * FROM offerings WHERE active = TRUE ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, offering: &Offering) -> Result<Offering, AppError> {
        sqlx::query_as::<_, Offering>(
            "UPDATE offerings SET name = $1, description = $2, duration_minutes = $3, price_cents = $4, updated_at = $5
             WHERE id = $6
             RETURNING *",
        )
        .bind(&offering.name)
        .bind(&offering.description)
        .bind(offering.duration_minutes)
        .bind(offering.price_cents)
        .bind(offering.updated_at)
        .bind(&offering.id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn deactivate(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE offerings SET active = FALSE, updated_at = $1 WHERE id = $2")
            .bind(chrono::Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::OfferingNotFound(id.to_string()));
        }
        Ok(())
    }
}
