//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{
    config::Config,
    db::{ContestStore, RegistrationStore, Stores, UserStore},
    identity::IdentityVerifier,
    payment::PaymentGateway,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    stores: Stores,

    /// Hosted checkout provider
    payments: Arc<dyn PaymentGateway>,

    /// Bearer token verifier
    identity: Arc<dyn IdentityVerifier>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        stores: Stores,
        payments: Arc<dyn PaymentGateway>,
        identity: Arc<dyn IdentityVerifier>,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                stores,
                payments,
                identity,
                config,
            }),
        }
    }

    pub fn contests(&self) -> &dyn ContestStore {
        self.inner.stores.contests.as_ref()
    }

    pub fn registrations(&self) -> &dyn RegistrationStore {
        self.inner.stores.registrations.as_ref()
    }

    pub fn users(&self) -> &dyn UserStore {
        self.inner.stores.users.as_ref()
    }

    pub fn payments(&self) -> &dyn PaymentGateway {
        self.inner.payments.as_ref()
    }

    pub fn identity(&self) -> &dyn IdentityVerifier {
        self.inner.identity.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
