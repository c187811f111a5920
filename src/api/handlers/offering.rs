use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crate::api::dtos::requests::{CreateOfferingRequest, UpdateOfferingRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::offering::Offering;
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

fn validate_offering_fields(name: &str, duration_minutes: i32, price_cents: i64) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }
    if duration_minutes <= 0 {
        return Err(AppError::Validation("Duration must be positive".into()));
    }
    if price_cents <= 0 {
        return Err(AppError::Validation("Price must be greater than 0".into()));
    }
    Ok(())
}

pub async fn list_offerings(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let offerings = state.offering_repo.list_active().await?;
    Ok(Json(offerings))
}

pub async fn get_offering(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let offering = state
        .offering_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::OfferingNotFound(id.clone()))?;
    Ok(Json(offering))
}

pub async fn create_offering(
    State(state): State<Arc<AppState>>,
    AuthUser(identity): AuthUser,
    Json(payload): Json<CreateOfferingRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !identity.is_admin() {
        return Err(AppError::Forbidden);
    }

    validate_offering_fields(&payload.name, payload.duration_minutes, payload.price_cents)?;

    let offering = Offering::new(
        payload.name,
        payload.description,
        payload.duration_minutes,
        payload.price_cents,
    );
    let created = state.offering_repo.create(&offering).await?;

    info!("Offering created: {} ({})", created.name, created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_offering(
    State(state): State<Arc<AppState>>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateOfferingRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !identity.is_admin() {
        return Err(AppError::Forbidden);
    }

    validate_offering_fields(&payload.name, payload.duration_minutes, payload.price_cents)?;

    let mut offering = state
        .offering_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::OfferingNotFound(id.clone()))?;

    offering.name = payload.name;
    offering.description = payload.description;
    offering.duration_minutes = payload.duration_minutes;
    offering.price_cents = payload.price_cents;
    offering.updated_at = Utc::now();

    let updated = state.offering_repo.update(&offering).await?;

    info!("Offering updated: {}", updated.id);

    Ok(Json(updated))
}

pub async fn delete_offering(
    State(state): State<Arc<AppState>>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !identity.is_admin() {
        return Err(AppError::Forbidden);
    }

    // Soft delete: the offering disappears from the public catalog but
    // existing bookings keep a valid reference.
    state.offering_repo.deactivate(&id).await?;

    info!("Offering deactivated: {}", id);

    Ok(StatusCode::NO_CONTENT)
}
