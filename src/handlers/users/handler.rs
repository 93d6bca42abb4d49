//! User handler implementations

use axum::{Json, extract::State};
use validator::Validate;

use crate::{error::AppResult, identity::Principal, services::UserService, state::AppState};

use super::{
    request::UpsertUserRequest,
    response::{RoleResponse, UserResponse},
};

/// Record a login: insert on first sight, refresh `last_login` afterwards
pub async fn upsert_user(
    State(state): State<AppState>,
    Json(payload): Json<UpsertUserRequest>,
) -> AppResult<Json<UserResponse>> {
    payload.validate()?;

    let user = UserService::upsert_login(state.users(), payload).await?;
    Ok(Json(user))
}

/// Role of the calling principal
pub async fn get_role(
    State(state): State<AppState>,
    principal: Principal,
) -> AppResult<Json<RoleResponse>> {
    let role = UserService::get_role(state.users(), &principal.email).await?;
    Ok(Json(RoleResponse { role }))
}
