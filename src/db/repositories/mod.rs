//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod contest_repo;
pub mod registration_repo;
pub mod user_repo;

pub use contest_repo::ContestRepository;
pub use registration_repo::RegistrationRepository;
pub use user_repo::UserRepository;
