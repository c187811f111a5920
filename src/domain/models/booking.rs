use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

/// Lifecycle of a booking. PENDING is the initial state; an external
/// confirmation process may move it to CONFIRMED. Cancellation is the only
/// transition out of either, and CANCELLED is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Active bookings count toward slot occupancy.
    pub fn is_active(self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub offering_id: String,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(user_id: String, offering_id: String, booking_date: NaiveDate, start_time: NaiveTime) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            offering_id,
            booking_date,
            start_time,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

/// Booking row joined with the owner and offering names, the shape returned
/// to API callers.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct BookingDetails {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub offering_id: String,
    pub offering_name: String,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl BookingDetails {
    pub fn from_parts(booking: Booking, user_name: String, offering_name: String) -> Self {
        Self {
            id: booking.id,
            user_id: booking.user_id,
            user_name,
            offering_id: booking.offering_id,
            offering_name,
            booking_date: booking.booking_date,
            start_time: booking.start_time,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}
