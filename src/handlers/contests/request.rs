//! Contest request DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{
    MAX_CONTEST_CATEGORY_LENGTH, MAX_CONTEST_DESCRIPTION_LENGTH, MAX_CONTEST_NAME_LENGTH,
};

/// Person hosting a contest
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
pub struct CreatorInfo {
    #[validate(email)]
    pub email: String,

    #[validate(length(max = 128))]
    pub name: Option<String>,

    pub image: Option<String>,
}

/// Create contest request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContestRequest {
    #[validate(length(min = 1, max = MAX_CONTEST_NAME_LENGTH))]
    pub name: String,

    #[validate(length(min = 1, max = MAX_CONTEST_CATEGORY_LENGTH))]
    pub category: String,

    /// Banner image URL
    #[validate(url)]
    pub image: String,

    /// Entry fee in major currency units
    #[validate(range(min = 0.0))]
    pub price: f64,

    /// Paid entries on offer
    #[validate(range(min = 0))]
    pub quantity: i32,

    #[validate(length(max = MAX_CONTEST_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(range(min = 0.0))]
    pub prize_money: Option<f64>,

    /// Submission deadline (optional)
    pub deadline: Option<DateTime<Utc>>,

    #[validate(length(max = MAX_CONTEST_DESCRIPTION_LENGTH))]
    pub task_instruction: Option<String>,

    #[validate(nested)]
    pub creator: CreatorInfo,
}
