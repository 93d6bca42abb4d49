//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod checkout;
pub mod contests;
pub mod health;
pub mod registrations;
pub mod users;

use axum::{Router, middleware};

use crate::{middleware::auth::auth_middleware, state::AppState};

/// Create all API routes
///
/// Routes returned by the `protected_routes` builders require a verified
/// bearer token; everything else is public.
pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .merge(registrations::protected_routes())
        .merge(users::protected_routes())
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .merge(health::routes())
        .merge(contests::routes())
        .merge(checkout::routes())
        .merge(registrations::public_routes())
        .merge(users::public_routes())
        .merge(protected)
}
