//! Checkout service
//!
//! Opens hosted checkout sessions and turns completed ones into paid
//! registrations.

use uuid::Uuid;

use crate::{
    constants::{ENTRIES_PER_REGISTRATION, checkout_metadata},
    db::{ContestStore, RegistrationStore},
    error::{AppError, AppResult},
    handlers::checkout::{request::CreateCheckoutSessionRequest, response::CheckoutSessionResponse},
    models::{Claim, NewRegistration},
    payment::{CheckoutRequest, PaymentGateway, from_minor_units, to_minor_units},
    utils::{normalize_email, validate_session_id},
};

/// Checkout service for business logic
pub struct CheckoutService;

impl CheckoutService {
    /// Open a checkout session for one contest
    ///
    /// Local state is never touched here; the entry is recorded by
    /// [`CheckoutService::finalize_session`] once the provider reports the
    /// session complete.
    pub async fn create_session(
        contests: &dyn ContestStore,
        payments: &dyn PaymentGateway,
        client_domain: &str,
        payload: CreateCheckoutSessionRequest,
    ) -> AppResult<CheckoutSessionResponse> {
        let contest = contests
            .find_by_id(&payload.contest_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        // A completed checkout records exactly one entry
        if payload.quantity != ENTRIES_PER_REGISTRATION {
            return Err(AppError::Validation(format!(
                "A checkout buys exactly {} entry",
                ENTRIES_PER_REGISTRATION
            )));
        }
        if to_minor_units(payload.price) != to_minor_units(contest.price) {
            return Err(AppError::Conflict(
                "Price does not match the contest entry fee".to_string(),
            ));
        }
        if !contest.has_entries_left() {
            return Err(AppError::Conflict("Contest has no entries left".to_string()));
        }
        if contest.is_closed() {
            return Err(AppError::Conflict("Contest deadline has passed".to_string()));
        }

        let client_domain = client_domain.trim_end_matches('/');
        let request = CheckoutRequest {
            contest_id: contest.id,
            product_name: payload.name,
            product_description: payload.description,
            product_image: payload.image,
            unit_price: contest.price,
            quantity: ENTRIES_PER_REGISTRATION,
            customer_email: normalize_email(&payload.customer.email),
            success_url: format!(
                "{}/payment-success?session_id={{CHECKOUT_SESSION_ID}}",
                client_domain
            ),
            cancel_url: format!("{}/contest/{}", client_domain, contest.id),
        };

        let session = payments.create_checkout_session(&request).await?;
        let url = session.url.ok_or_else(|| {
            AppError::UpstreamPayment("Checkout session has no redirect url".to_string())
        })?;

        tracing::info!(
            "Checkout session {} opened for contest {} by {}",
            session.id,
            contest.id,
            request.customer_email
        );

        Ok(CheckoutSessionResponse {
            url,
            session_id: session.id,
        })
    }

    /// Record the paid entry for a completed checkout session
    ///
    /// Safe to call any number of times for the same session: the first call
    /// creates the registration and takes one entry off the contest, later
    /// calls return [`Claim::Existing`].
    pub async fn finalize_session(
        payments: &dyn PaymentGateway,
        contests: &dyn ContestStore,
        registrations: &dyn RegistrationStore,
        session_id: &str,
    ) -> AppResult<Claim> {
        validate_session_id(session_id).map_err(|e| AppError::Validation(e.to_string()))?;

        let session = payments.retrieve_checkout_session(session_id).await?;

        let contest_id = session
            .metadata_value(checkout_metadata::CONTEST_ID)
            .and_then(|id| Uuid::parse_str(id).ok())
            .ok_or_else(|| {
                AppError::NotFound("Checkout session is not linked to a contest".to_string())
            })?;

        let contest = contests
            .find_by_id(&contest_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Contest not found".to_string()))?;

        if let Some(existing) = registrations.find_by_transaction(&session.id).await? {
            tracing::debug!("Checkout session {} already recorded", session.id);
            return Ok(Claim::Existing(existing));
        }

        if !session.is_complete() {
            return Err(AppError::Conflict(
                "Checkout session is not complete".to_string(),
            ));
        }
        if !session.is_paid() {
            return Err(AppError::Conflict(
                "Checkout session payment has not settled".to_string(),
            ));
        }

        let customer = session
            .metadata_value(checkout_metadata::CUSTOMER)
            .or_else(|| session.paying_email())
            .map(normalize_email)
            .ok_or_else(|| {
                AppError::UpstreamPayment("Checkout session has no customer email".to_string())
            })?;

        let price = session
            .amount_total
            .map(from_minor_units)
            .unwrap_or(contest.price);

        let claim = registrations
            .claim(NewRegistration {
                contest_id: contest.id,
                transaction_id: session.id.clone(),
                customer,
                creator: contest.creator_email,
                name: contest.name,
                category: contest.category,
                price,
                image: contest.image,
            })
            .await?;

        if claim.is_created() {
            tracing::info!(
                "Registration {} recorded for contest {} (session {})",
                claim.registration().id,
                contest_id,
                session.id
            );
        }

        Ok(claim)
    }
}
