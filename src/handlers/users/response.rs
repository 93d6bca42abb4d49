//! User response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::User;

/// User profile response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            image: u.image,
            role: u.role,
            created_at: u.created_at,
            last_login: u.last_login,
        }
    }
}

/// Role of the calling principal; `null` when the email has never logged in
#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub role: Option<String>,
}
