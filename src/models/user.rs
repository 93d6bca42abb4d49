//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::roles;

/// User database model
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

/// Profile fields sent on every login
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
}

impl UserProfile {
    /// First-login record: default role, `created_at == last_login`
    pub fn into_user(self, now: DateTime<Utc>) -> User {
        User {
            id: Uuid::new_v4(),
            email: self.email,
            name: self.name,
            image: self.image,
            role: roles::CUSTOMER.to_string(),
            created_at: now,
            last_login: now,
        }
    }
}
