//! Utility functions

pub mod validation;

pub use validation::{normalize_email, validate_session_id};
