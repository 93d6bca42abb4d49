//! Contest handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Contest routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/contests",
            get(handler::list_contests).post(handler::create_contest),
        )
        .route("/contests/{id}", get(handler::get_contest))
        .route("/my-inventory/{email}", get(handler::list_inventory))
}
