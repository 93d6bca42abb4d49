//! Checkout handler implementations

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::{error::AppResult, services::CheckoutService, state::AppState};

use super::{
    request::{CreateCheckoutSessionRequest, PaymentSuccessRequest},
    response::{CheckoutSessionResponse, PaymentSuccessResponse},
};

/// Open a hosted checkout session for one contest
pub async fn create_checkout_session(
    State(state): State<AppState>,
    Json(payload): Json<CreateCheckoutSessionRequest>,
) -> AppResult<Json<CheckoutSessionResponse>> {
    payload.validate()?;

    let session = CheckoutService::create_session(
        state.contests(),
        state.payments(),
        &state.config().server.client_domain,
        payload,
    )
    .await?;

    Ok(Json(session))
}

/// Record the paid entry for a completed checkout
///
/// Replays for an already recorded session answer 200 with the same ids.
pub async fn payment_success(
    State(state): State<AppState>,
    Json(payload): Json<PaymentSuccessRequest>,
) -> AppResult<(StatusCode, Json<PaymentSuccessResponse>)> {
    payload.validate()?;

    let claim = CheckoutService::finalize_session(
        state.payments(),
        state.contests(),
        state.registrations(),
        &payload.session_id,
    )
    .await?;

    let status = if claim.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    let registration = claim.registration();

    Ok((
        status,
        Json(PaymentSuccessResponse {
            transaction_id: registration.transaction_id.clone(),
            registration_id: registration.id,
            created: claim.is_created(),
        }),
    ))
}
