use serde::{Deserialize, Serialize};

use crate::domain::models::user::ROLE_ADMIN;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub iss: String,
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
    pub jti: String,
    pub role: String,
}

/// The resolved caller: user id plus role, extracted from a verified access
/// token. Passed explicitly into every service operation instead of living in
/// any ambient request context.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: String,
    pub role: String,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}
