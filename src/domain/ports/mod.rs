use crate::domain::models::{
    booking::{Booking, BookingDetails, BookingStatus},
    offering::Offering,
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait OfferingRepository: Send + Sync {
    async fn create(&self, offering: &Offering) -> Result<Offering, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Offering>, AppError>;
    async fn list_active(&self) -> Result<Vec<Offering>, AppError>;
    async fn update(&self, offering: &Offering) -> Result<Offering, AppError>;
    async fn deactivate(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a new booking. The bookings table carries a unique index over
    /// (offering_id, booking_date, start_time) restricted to non-cancelled
    /// rows; implementations must map that unique violation to
    /// `AppError::SlotTaken` so a racing duplicate surfaces exactly like the
    /// application-level conflict check.
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn find_detail_by_id(&self, id: &str) -> Result<Option<BookingDetails>, AppError>;
    /// All bookings of one user, booking_date descending, start_time descending.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<BookingDetails>, AppError>;
    /// Any PENDING or CONFIRMED booking occupying the given slot.
    async fn find_active_conflict(
        &self,
        offering_id: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> Result<Option<Booking>, AppError>;
    async fn set_status(&self, id: &str, status: BookingStatus) -> Result<Booking, AppError>;
}
