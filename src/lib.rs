//! ProChallenger - Contest Hosting Backend
//!
//! Creators publish paid contests, participants buy entries through a hosted
//! checkout, and completed checkouts are reconciled into registrations.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Stores**: Persistence traits with Postgres and in-memory backends
//! - **Payment / Identity**: External provider clients behind traits
//! - **Models**: Domain models

pub mod app;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod middleware;
pub mod models;
pub mod payment;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use app::build_router;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
