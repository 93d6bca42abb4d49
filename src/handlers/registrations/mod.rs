//! Registration handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Routes readable without a bearer credential
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/manage-contests/{email}", get(handler::list_managed))
}

/// Routes that require a verified principal
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/my-contests", get(handler::list_mine))
}
