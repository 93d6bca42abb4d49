//! User handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Routes readable without a bearer credential
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/user", post(handler::upsert_user))
}

/// Routes that require a verified principal
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/user/role", get(handler::get_role))
}
