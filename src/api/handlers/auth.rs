use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::requests::{LoginRequest, RegisterRequest};
use crate::api::dtos::responses::UserResponse;
use crate::domain::models::user::User;
use crate::error::AppError;
use crate::state::AppState;
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use rand::rngs::OsRng;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Registration attempt for email: {}", payload.email);

    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }
    if payload.email.trim().is_empty() || !payload.email.contains('@') {
        return Err(AppError::Validation("A valid email is required".into()));
    }
    if payload.password.len() < 8 {
        return Err(AppError::Validation("Password must be at least 8 characters".into()));
    }

    if state.user_repo.find_by_email(&payload.email).await?.is_some() {
        warn!("Registration failed: email already exists - {}", payload.email);
        return Err(AppError::EmailTaken);
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(payload.password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string();

    let user = User::new(payload.name, payload.email, password_hash);
    let created = state.user_repo.create(&user).await?;

    info!("User registered: {} with id: {}", created.email, created.id);

    Ok((StatusCode::CREATED, Json(UserResponse::from_user(&created, None))))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Login attempt for email: {}", payload.email);

    let user = state
        .user_repo
        .find_by_email(&payload.email)
        .await?
        .ok_or_else(|| {
            warn!("Login failed: user not found - {}", payload.email);
            AppError::InvalidCredentials
        })?;

    let parsed_hash = PasswordHash::new(&user.password_hash).map_err(|_| AppError::Internal)?;

    Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| {
            warn!("Login failed: invalid password for user - {}", payload.email);
            AppError::InvalidCredentials
        })?;

    let token = state.auth_service.issue_token(&user)?;

    info!("User logged in: {}", user.id);

    Ok(Json(UserResponse::from_user(&user, Some(token))))
}
