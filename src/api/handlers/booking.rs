use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::CreateBookingRequest;
use crate::api::extractors::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;
use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(identity): AuthUser,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.offering_id.trim().is_empty() {
        return Err(AppError::Validation("Offering id is required".into()));
    }

    let date = NaiveDate::parse_from_str(&payload.booking_date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))?;

    let time = NaiveTime::parse_from_str(&payload.start_time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&payload.start_time, "%H:%M:%S"))
        .map_err(|_| AppError::Validation("Invalid time format (HH:MM)".into()))?;

    let created = state
        .booking_service
        .create_booking(&identity, &payload.offering_id, date, time)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_my_bookings(
    State(state): State<Arc<AppState>>,
    AuthUser(identity): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_service.list_bookings(&identity).await?;
    Ok(Json(bookings))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(identity): AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_service.get_booking(&identity, &booking_id).await?;
    Ok(Json(booking))
}

pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(identity): AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.booking_service.cancel_booking(&identity, &booking_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
