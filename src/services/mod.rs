//! Business logic services

pub mod checkout_service;
pub mod contest_service;
pub mod registration_service;
pub mod user_service;

pub use checkout_service::CheckoutService;
pub use contest_service::ContestService;
pub use registration_service::RegistrationService;
pub use user_service::UserService;
