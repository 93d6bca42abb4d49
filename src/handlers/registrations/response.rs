//! Registration response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Registration;

/// Registration response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub id: Uuid,
    pub contest_id: Uuid,
    pub transaction_id: String,
    pub customer: String,
    pub status: String,
    pub creator: String,
    pub name: String,
    pub category: String,
    pub quantity: i32,
    pub price: f64,
    pub image: String,
    pub created_at: DateTime<Utc>,
}

impl From<Registration> for RegistrationResponse {
    fn from(r: Registration) -> Self {
        Self {
            id: r.id,
            contest_id: r.contest_id,
            transaction_id: r.transaction_id,
            customer: r.customer,
            status: r.status,
            creator: r.creator,
            name: r.name,
            category: r.category,
            quantity: r.quantity,
            price: r.price,
            image: r.image,
            created_at: r.created_at,
        }
    }
}
