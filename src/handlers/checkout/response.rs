//! Checkout response DTOs

use serde::Serialize;
use uuid::Uuid;

/// Hosted checkout page to redirect the buyer to
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSessionResponse {
    pub url: String,
    pub session_id: String,
}

/// Confirmation of a recorded paid entry
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSuccessResponse {
    pub transaction_id: String,
    pub registration_id: Uuid,
    /// False when this call replayed an already recorded checkout
    pub created: bool,
}
