//! Identity provider integration
//!
//! Bearer credentials are ID tokens issued by the identity provider. The
//! verifier turns a token into the caller's [`Principal`].

pub mod firebase;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

pub use firebase::FirebaseVerifier;

/// Identity derived from a verified bearer credential
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Provider user id
    pub uid: String,
    pub email: String,
}

/// Verifies bearer tokens against the identity provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Fails with `InvalidToken`/`TokenExpired` carrying the provider's reason
    async fn verify(&self, token: &str) -> AppResult<Principal>;
}
