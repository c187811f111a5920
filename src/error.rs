use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("User not found")]
    UserNotFound,
    #[error("Offering not found: {0}")]
    OfferingNotFound(String),
    #[error("Booking not found")]
    BookingNotFound,
    #[error("Time slot already booked for this offering")]
    SlotTaken,
    #[error("Booking is already cancelled")]
    AlreadyCancelled,
    #[error("Cannot cancel past bookings")]
    PastBooking,
    #[error("Email already registered")]
    EmailTaken,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("You do not have permission to access this resource")]
    Forbidden,
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Internal server error")]
    Internal,
}

impl AppError {
    /// Stable machine-readable code carried on every error response.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) | AppError::Internal => "INTERNAL_ERROR",
            AppError::UserNotFound => "USER_NOT_FOUND",
            AppError::OfferingNotFound(_) => "OFFERING_NOT_FOUND",
            AppError::BookingNotFound => "BOOKING_NOT_FOUND",
            AppError::SlotTaken => "SLOT_TAKEN",
            AppError::AlreadyCancelled => "ALREADY_CANCELLED",
            AppError::PastBooking => "PAST_BOOKING",
            AppError::EmailTaken => "EMAIL_TAKEN",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Forbidden => "FORBIDDEN",
            AppError::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                if let Some(db_err) = e.as_database_error()
                    && db_err.is_unique_violation()
                {
                    return (
                        StatusCode::CONFLICT,
                        Json(json!({
                            "error": "Resource already exists (duplicate entry)",
                            "code": "DUPLICATE"
                        })),
                    )
                        .into_response();
                }

                error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::UserNotFound
            | AppError::OfferingNotFound(_)
            | AppError::BookingNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::SlotTaken
            | AppError::AlreadyCancelled
            | AppError::PastBooking
            | AppError::EmailTaken => (StatusCode::CONFLICT, self.to_string()),
            AppError::InvalidCredentials | AppError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AppError::Forbidden => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string()),
        };

        let body = Json(json!({
            "error": message,
            "code": self.code()
        }));

        (status, body).into_response()
    }
}
