use serde::Serialize;

use crate::domain::models::user::User;

#[derive(Serialize)]
pub struct UserResponse {
    pub name: String,
    pub email: String,
    pub role: String,
    pub token: Option<String>,
}

impl UserResponse {
    pub fn from_user(user: &User, token: Option<String>) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            token,
        }
    }
}
