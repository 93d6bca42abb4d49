//! Payment provider integration
//!
//! The checkout flow only needs two calls from the provider: open a hosted
//! checkout session and read one back by id.

pub mod stripe;

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    constants::{CHECKOUT_STATUS_COMPLETE, payment_status},
    error::AppResult,
};

pub use stripe::StripeGateway;

/// Line item and redirect data for a new checkout session
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub contest_id: Uuid,
    pub product_name: String,
    pub product_description: Option<String>,
    pub product_image: Option<String>,
    /// Unit price in major currency units
    pub unit_price: f64,
    pub quantity: i32,
    pub customer_email: String,
    pub success_url: String,
    pub cancel_url: String,
}

/// A checkout session as reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub customer_details: Option<CustomerDetails>,
    /// Total in minor currency units
    #[serde(default)]
    pub amount_total: Option<i64>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CustomerDetails {
    #[serde(default)]
    pub email: Option<String>,
}

impl CheckoutSession {
    pub fn is_complete(&self) -> bool {
        self.status.as_deref() == Some(CHECKOUT_STATUS_COMPLETE)
    }

    /// Money has settled, or the session needed none
    ///
    /// Delayed payment methods leave a completed session `unpaid` until the
    /// funds arrive.
    pub fn is_paid(&self) -> bool {
        matches!(
            self.payment_status.as_deref(),
            Some(payment_status::PAID | payment_status::NO_PAYMENT_REQUIRED)
        )
    }

    /// Metadata value set when the session was created
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Email the customer paid with, falling back to the prefilled one
    pub fn paying_email(&self) -> Option<&str> {
        self.customer_details
            .as_ref()
            .and_then(|d| d.email.as_deref())
            .or(self.customer_email.as_deref())
    }
}

/// Convert a price in major units to minor units (cents)
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Convert minor units (cents) back to major units
pub fn from_minor_units(amount: i64) -> f64 {
    amount as f64 / 100.0
}

/// Hosted checkout provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Open a checkout session; fails with `UpstreamPayment` if rejected
    async fn create_checkout_session(&self, request: &CheckoutRequest) -> AppResult<CheckoutSession>;

    /// Read a session back; fails with `NotFound` for unknown ids
    async fn retrieve_checkout_session(&self, session_id: &str) -> AppResult<CheckoutSession>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_units() {
        assert_eq!(to_minor_units(19.99), 1999);
        assert_eq!(to_minor_units(0.1 + 0.2), 30);
        assert_eq!(from_minor_units(2500), 25.0);
    }

    #[test]
    fn test_session_accessors() {
        let session: CheckoutSession = serde_json::from_value(serde_json::json!({
            "id": "cs_test_1",
            "object": "checkout.session",
            "status": "complete",
            "payment_status": "paid",
            "customer_email": "prefilled@example.com",
            "customer_details": { "email": "paid@example.com", "name": "Ada" },
            "amount_total": 1500,
            "metadata": { "contestId": "c1" }
        }))
        .unwrap();

        assert!(session.is_complete());
        assert!(session.is_paid());
        assert_eq!(session.paying_email(), Some("paid@example.com"));
        assert_eq!(session.metadata_value("contestId"), Some("c1"));
        assert_eq!(session.metadata_value("missing"), None);

        let open = CheckoutSession {
            id: "cs_test_2".into(),
            status: Some("open".into()),
            ..Default::default()
        };
        assert!(!open.is_complete());
        assert!(!open.is_paid());

        let delayed = CheckoutSession {
            id: "cs_test_3".into(),
            status: Some("complete".into()),
            payment_status: Some("unpaid".into()),
            ..Default::default()
        };
        assert!(delayed.is_complete());
        assert!(!delayed.is_paid());
        assert_eq!(open.paying_email(), None);
    }
}
