//! Registration handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    error::AppResult, identity::Principal, services::RegistrationService, state::AppState,
};

use super::response::RegistrationResponse;

/// Entries bought by the calling principal
pub async fn list_mine(
    State(state): State<AppState>,
    principal: Principal,
) -> AppResult<Json<Vec<RegistrationResponse>>> {
    let registrations =
        RegistrationService::list_for_customer(state.registrations(), &principal.email).await?;
    Ok(Json(registrations))
}

/// Entries into contests hosted by a creator
pub async fn list_managed(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<RegistrationResponse>>> {
    let registrations =
        RegistrationService::list_for_creator(state.registrations(), &email).await?;
    Ok(Json(registrations))
}
