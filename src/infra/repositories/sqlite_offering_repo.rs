use crate::domain::{models::offering::Offering, ports::OfferingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteOfferingRepo {
    pool: SqlitePool,
}

impl SqliteOfferingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OfferingRepository for SqliteOfferingRepo {
    async fn create(&self, offering: &Offering) -> Result<Offering, AppError> {
        sqlx::query_as::<_, Offering>(
            "INSERT INTO offerings (id, name, description, duration_minutes, price_cents, active, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
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
        sqlx::query_as::<_, Offering>("SELECT * FROM offerings WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_active(&self) -> Result<Vec<Offering>, AppError> {
        sqlx::query_as::<_, Offering>("SELECT * FROM offerings WHERE active = 1 ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, offering: &Offering) -> Result<Offering, AppError> {
        sqlx::query_as::<_, Offering>(
            "UPDATE offerings SET name = ?, description = ?, duration_minutes = ?, price_cents = ?, updated_at = ?
             WHERE id = ?
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
        let result = sqlx::query("UPDATE offerings SET active = 0, updated_at = ? WHERE id = ?")
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
