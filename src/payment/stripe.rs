//! Stripe Checkout client
//!
//! Talks to the Stripe REST API directly: form-encoded requests, JSON
//! responses, secret key as bearer credential.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    config::PaymentConfig,
    constants::checkout_metadata,
    error::{AppError, AppResult},
};

use super::{CheckoutRequest, CheckoutSession, PaymentGateway, to_minor_units};

/// Payment gateway backed by Stripe Checkout
pub struct StripeGateway {
    client: Client,
    api_base: String,
    secret_key: String,
    currency: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetails,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetails {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

impl StripeGateway {
    pub fn new(config: &PaymentConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("payment HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base: config.api_base.clone(),
            secret_key: config.secret_key.clone(),
            currency: config.currency.clone(),
        })
    }

    /// Form fields for `POST /v1/checkout/sessions`
    fn checkout_form(&self, request: &CheckoutRequest) -> Vec<(String, String)> {
        let mut form = vec![
            ("mode".to_string(), "payment".to_string()),
            (
                "line_items[0][price_data][currency]".to_string(),
                self.currency.clone(),
            ),
            (
                "line_items[0][price_data][unit_amount]".to_string(),
                to_minor_units(request.unit_price).to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]".to_string(),
                request.product_name.clone(),
            ),
            (
                "line_items[0][quantity]".to_string(),
                request.quantity.to_string(),
            ),
            ("customer_email".to_string(), request.customer_email.clone()),
            (
                format!("metadata[{}]", checkout_metadata::CONTEST_ID),
                request.contest_id.to_string(),
            ),
            (
                format!("metadata[{}]", checkout_metadata::CUSTOMER),
                request.customer_email.clone(),
            ),
            ("success_url".to_string(), request.success_url.clone()),
            ("cancel_url".to_string(), request.cancel_url.clone()),
        ];

        if let Some(description) = request.product_description.as_ref().filter(|d| !d.is_empty()) {
            form.push((
                "line_items[0][price_data][product_data][description]".to_string(),
                description.clone(),
            ));
        }
        if let Some(image) = request.product_image.as_ref().filter(|i| !i.is_empty()) {
            form.push((
                "line_items[0][price_data][product_data][images][0]".to_string(),
                image.clone(),
            ));
        }

        form
    }

    async fn read_session(response: Response) -> AppResult<CheckoutSession> {
        let status = response.status();

        if status.is_success() {
            return response
                .json::<CheckoutSession>()
                .await
                .map_err(|e| AppError::UpstreamPayment(format!("malformed session: {}", e)));
        }

        let details = response
            .json::<StripeErrorBody>()
            .await
            .ok()
            .map(|body| body.error);
        let message = details
            .as_ref()
            .and_then(|d| d.message.clone())
            .unwrap_or_else(|| format!("request failed with status {}", status));

        debug!(%status, code = ?details.as_ref().and_then(|d| d.code.as_deref()), "Stripe rejected request");

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound("Checkout session not found".to_string()));
        }
        Err(AppError::UpstreamPayment(message))
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    #[instrument(skip(self, request), fields(contest_id = %request.contest_id))]
    async fn create_checkout_session(&self, request: &CheckoutRequest) -> AppResult<CheckoutSession> {
        let response = self
            .client
            .post(format!("{}/v1/checkout/sessions", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&self.checkout_form(request))
            .send()
            .await
            .map_err(|e| AppError::UpstreamPayment(e.to_string()))?;

        Self::read_session(response).await
    }

    #[instrument(skip(self))]
    async fn retrieve_checkout_session(&self, session_id: &str) -> AppResult<CheckoutSession> {
        let response = self
            .client
            .get(format!("{}/v1/checkout/sessions/{}", self.api_base, session_id))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|e| AppError::UpstreamPayment(e.to_string()))?;

        Self::read_session(response).await
    }
}
