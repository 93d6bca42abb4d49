//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod contest;
pub mod registration;
pub mod user;

pub use contest::*;
pub use registration::*;
pub use user::*;
