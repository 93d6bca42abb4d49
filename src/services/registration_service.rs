//! Registration service

use crate::{
    db::RegistrationStore,
    error::AppResult,
    handlers::registrations::response::RegistrationResponse,
    utils::normalize_email,
};

/// Registration service for business logic
pub struct RegistrationService;

impl RegistrationService {
    /// Entries bought by a customer
    pub async fn list_for_customer(
        store: &dyn RegistrationStore,
        email: &str,
    ) -> AppResult<Vec<RegistrationResponse>> {
        let registrations = store.list_by_customer(&normalize_email(email)).await?;
        Ok(registrations.into_iter().map(Into::into).collect())
    }

    /// Entries into contests hosted by a creator
    pub async fn list_for_creator(
        store: &dyn RegistrationStore,
        email: &str,
    ) -> AppResult<Vec<RegistrationResponse>> {
        let registrations = store.list_by_creator(&normalize_email(email)).await?;
        Ok(registrations.into_iter().map(Into::into).collect())
    }
}
