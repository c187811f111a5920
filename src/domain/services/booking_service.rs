use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::{info, warn};

use crate::domain::models::auth::Identity;
use crate::domain::models::booking::{Booking, BookingDetails, BookingStatus};
use crate::domain::models::user::User;
use crate::domain::ports::{BookingRepository, OfferingRepository, UserRepository};
use crate::error::AppError;

/// Orchestrates the booking lifecycle: creation with slot-conflict
/// resolution, ownership-scoped retrieval, and cancellation.
///
/// Holds no mutable state; callers share it behind an `Arc`. The one
/// race-sensitive path (check-then-insert on create) is backed by the
/// store's unique active-slot index, so the second of two racing creates
/// fails with `SlotTaken` no matter how the checks interleave.
pub struct BookingService {
    booking_repo: Arc<dyn BookingRepository>,
    user_repo: Arc<dyn UserRepository>,
    offering_repo: Arc<dyn OfferingRepository>,
}

impl BookingService {
    pub fn new(
        booking_repo: Arc<dyn BookingRepository>,
        user_repo: Arc<dyn UserRepository>,
        offering_repo: Arc<dyn OfferingRepository>,
    ) -> Self {
        Self { booking_repo, user_repo, offering_repo }
    }

    /// Create a PENDING booking for the caller. The booking date must be
    /// today or later. An inactive offering may still be booked against;
    /// `active` only filters the public catalog listing.
    pub async fn create_booking(
        &self,
        identity: &Identity,
        offering_id: &str,
        booking_date: NaiveDate,
        start_time: NaiveTime,
    ) -> Result<BookingDetails, AppError> {
        info!("Creating booking for user: {}", identity.user_id);

        let user = self.resolve_user(identity).await?;

        let offering = self
            .offering_repo
            .find_by_id(offering_id)
            .await?
            .ok_or_else(|| AppError::OfferingNotFound(offering_id.to_string()))?;

        if booking_date < Utc::now().date_naive() {
            return Err(AppError::Validation("Booking date must not be in the past".into()));
        }

        if let Some(existing) = self
            .booking_repo
            .find_active_conflict(&offering.id, booking_date, start_time)
            .await?
        {
            warn!(
                "Booking rejected: slot {} {} for offering {} held by booking {}",
                booking_date, start_time, offering.id, existing.id
            );
            return Err(AppError::SlotTaken);
        }

        let booking = Booking::new(user.id.clone(), offering.id.clone(), booking_date, start_time);

        // The unique active-slot index catches the race where another caller
        // inserted between the check above and this insert.
        let created = self.booking_repo.create(&booking).await?;
        info!("Booking created with id: {}", created.id);

        Ok(BookingDetails::from_parts(created, user.name, offering.name))
    }

    /// All bookings owned by the caller, most recent slot first
    /// (booking_date descending, start_time descending).
    pub async fn list_bookings(&self, identity: &Identity) -> Result<Vec<BookingDetails>, AppError> {
        let user = self.resolve_user(identity).await?;
        self.booking_repo.list_by_user(&user.id).await
    }

    /// Fetch one booking. A booking owned by someone else is reported as
    /// not found rather than forbidden, so callers cannot probe for the
    /// existence of other users' bookings.
    pub async fn get_booking(
        &self,
        identity: &Identity,
        booking_id: &str,
    ) -> Result<BookingDetails, AppError> {
        let details = self
            .booking_repo
            .find_detail_by_id(booking_id)
            .await?
            .ok_or(AppError::BookingNotFound)?;

        if details.user_id != identity.user_id && !identity.is_admin() {
            return Err(AppError::BookingNotFound);
        }

        Ok(details)
    }

    /// Cancel a booking. Rejected if it is already cancelled or its date has
    /// passed; otherwise the status flips to CANCELLED and nothing else
    /// changes. Cancelled bookings free their slot for rebooking.
    pub async fn cancel_booking(&self, identity: &Identity, booking_id: &str) -> Result<(), AppError> {
        info!("Cancelling booking with id: {}", booking_id);

        let booking = self
            .booking_repo
            .find_by_id(booking_id)
            .await?
            .ok_or(AppError::BookingNotFound)?;

        if booking.user_id != identity.user_id && !identity.is_admin() {
            return Err(AppError::BookingNotFound);
        }

        if booking.status == BookingStatus::Cancelled {
            return Err(AppError::AlreadyCancelled);
        }

        if booking.booking_date < Utc::now().date_naive() {
            return Err(AppError::PastBooking);
        }

        self.booking_repo.set_status(&booking.id, BookingStatus::Cancelled).await?;
        info!("Booking cancelled: {}", booking_id);

        Ok(())
    }

    /// The caller's token is expected to reference a stored user; a miss
    /// means the token and the store disagree, not a normal caller error.
    async fn resolve_user(&self, identity: &Identity) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(&identity.user_id)
            .await?
            .ok_or(AppError::UserNotFound)
    }
}
