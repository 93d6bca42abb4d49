//! Store traits
//!
//! Handlers and services depend on these traits; Postgres and the in-memory
//! store both implement them.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Claim, Contest, NewContest, NewRegistration, Registration, User, UserProfile},
};

/// Persisted contests
#[async_trait]
pub trait ContestStore: Send + Sync {
    /// Insert a contest and return it with its assigned id
    async fn insert(&self, contest: NewContest) -> AppResult<Contest>;

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Contest>>;

    /// All contests, newest first
    async fn list(&self) -> AppResult<Vec<Contest>>;

    /// Contests hosted by the given creator, newest first
    async fn list_by_creator(&self, email: &str) -> AppResult<Vec<Contest>>;
}

/// Paid entries
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    async fn find_by_transaction(&self, transaction_id: &str) -> AppResult<Option<Registration>>;

    /// Entries bought by the given customer, newest first
    async fn list_by_customer(&self, email: &str) -> AppResult<Vec<Registration>>;

    /// Entries into contests hosted by the given creator, newest first
    async fn list_by_creator(&self, email: &str) -> AppResult<Vec<Registration>>;

    /// Record a paid entry exactly once per transaction id.
    ///
    /// Inserting the registration and decrementing the contest quantity happen
    /// atomically. A transaction id that is already recorded yields
    /// [`Claim::Existing`] and changes nothing. Fails with `NotFound` when the
    /// contest is gone and `Conflict` when it has no entries left.
    async fn claim(&self, entry: NewRegistration) -> AppResult<Claim>;
}

/// Application users
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert on first login, otherwise refresh `last_login` and profile fields
    async fn upsert_login(&self, profile: UserProfile, now: DateTime<Utc>) -> AppResult<User>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}
