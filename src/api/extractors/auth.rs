use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use crate::domain::models::auth::Identity;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::Span;

/// Resolves `Authorization: Bearer <jwt>` into the caller's identity.
/// Handlers take this by value; everything behind it receives the identity
/// as an explicit argument.
pub struct AuthUser(pub Identity);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = header.strip_prefix("Bearer ").ok_or(AppError::Unauthorized)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let claims = app_state.auth_service.verify_token(token)?;

        let identity = Identity {
            user_id: claims.sub,
            role: claims.role,
        };

        Span::current().record("user_id", &identity.user_id);

        Ok(AuthUser(identity))
    }
}
