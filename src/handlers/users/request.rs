//! User request DTOs

use serde::Deserialize;
use validator::Validate;

/// Login profile upsert request
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertUserRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(max = 100))]
    pub name: Option<String>,

    /// Avatar URL
    pub image: Option<String>,
}
