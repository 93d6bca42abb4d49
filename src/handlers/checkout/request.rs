//! Checkout request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_CONTEST_DESCRIPTION_LENGTH, MAX_CONTEST_NAME_LENGTH};

/// Buyer details sent by the client; profile fields beyond the email are ignored
#[derive(Debug, Deserialize, Validate)]
pub struct CustomerInfo {
    #[validate(email)]
    pub email: String,
}

/// Start checkout request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutSessionRequest {
    pub contest_id: Uuid,

    /// Product name shown on the hosted checkout page
    #[validate(length(min = 1, max = MAX_CONTEST_NAME_LENGTH))]
    pub name: String,

    #[validate(length(max = MAX_CONTEST_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub image: Option<String>,

    /// Entry fee the client displayed; must match the contest price
    #[validate(range(min = 0.0))]
    pub price: f64,

    /// Entries to buy; a checkout covers exactly one
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1))]
    pub quantity: i32,

    #[validate(nested)]
    pub customer: CustomerInfo,
}

fn default_quantity() -> i32 {
    1
}

/// Checkout completion callback
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSuccessRequest {
    #[validate(length(min = 1))]
    pub session_id: String,
}
