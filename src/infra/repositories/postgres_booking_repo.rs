use crate::domain::{
    models::booking::{Booking, BookingDetails, BookingStatus},
    ports::BookingRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;

const DETAIL_SELECT: &str =
    "SELECT b.id, b.user_id, u.name AS user_name, b.offering_id, o.name AS offering_name,
            b.booking_date, b.start_time, b.status, b.created_at
     FROM bookings b
     JOIN users u ON u.id = b.user_id
     JOIN offerings o ON o.id = b.offering_id";

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, user_id, offering_id, booking_date, start_time, status, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *",
        )
        .bind(&booking.id)
        .bind(&booking.user_id)
        .bind(&booking.offering_id)
        .bind(booking.booking_date)
        .bind(booking.start_time)
        .bind(booking.status)
        .bind(booking.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // The partial unique index over active slots fired: a concurrent
            // caller took the slot between check and insert.
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::SlotTaken,
            _ => AppError::Database(e),
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_detail_by_id(&self, id: &str) -> Result<Option<BookingDetails>, AppError> {
        sqlx::query_as::<_, BookingDetails>(&format!("{DETAIL_SELECT} WHERE b.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<BookingDetails>, AppError> {
        sqlx::query_as::<_, BookingDetails>(&format!(
            "{DETAIL_SELECT} WHERE b.user_id = $1 ORDER BY b.booking_date DESC, b.start_time DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_active_conflict(
        &self,
        offering_id: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings
             WHERE offering_id = $1 AND booking_date = $2 AND start_time = $3
               AND status IN ('PENDING', 'CONFIRMED')",
        )
        .bind(offering_id)
        .bind(date)
        .bind(time)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn set_status(&self, id: &str, status: BookingStatus) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>("UPDATE bookings SET status = $1 WHERE id = $2 RETURNING *")
            .bind(status)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
