//! Contest response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Contest;

use super::request::CreatorInfo;

/// Contest response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestResponse {
    pub id: Uuid,
    pub creator: CreatorInfo,
    pub name: String,
    pub category: String,
    pub image: String,
    pub price: f64,
    pub quantity: i32,
    pub description: Option<String>,
    pub prize_money: Option<f64>,
    pub deadline: Option<DateTime<Utc>>,
    pub task_instruction: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Contest> for ContestResponse {
    fn from(c: Contest) -> Self {
        Self {
            id: c.id,
            creator: CreatorInfo {
                email: c.creator_email,
                name: c.creator_name,
                image: c.creator_image,
            },
            name: c.name,
            category: c.category,
            image: c.image,
            price: c.price,
            quantity: c.quantity,
            description: c.description,
            prize_money: c.prize_money,
            deadline: c.deadline,
            task_instruction: c.task_instruction,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
