//! Checkout handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Checkout routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/create-checkout-session",
            post(handler::create_checkout_session),
        )
        .route("/payment-success", post(handler::payment_success))
}
