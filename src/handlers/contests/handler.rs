//! Contest handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{error::AppResult, services::ContestService, state::AppState};

use super::{request::CreateContestRequest, response::ContestResponse};

/// Create a new contest
pub async fn create_contest(
    State(state): State<AppState>,
    Json(payload): Json<CreateContestRequest>,
) -> AppResult<(StatusCode, Json<ContestResponse>)> {
    payload.validate()?;

    let contest = ContestService::create_contest(state.contests(), payload).await?;

    Ok((StatusCode::CREATED, Json(contest)))
}

/// List all contests
pub async fn list_contests(State(state): State<AppState>) -> AppResult<Json<Vec<ContestResponse>>> {
    let contests = ContestService::list_contests(state.contests()).await?;
    Ok(Json(contests))
}

/// Get a specific contest
pub async fn get_contest(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ContestResponse>> {
    let contest = ContestService::get_contest(state.contests(), &id).await?;
    Ok(Json(contest))
}

/// Contests hosted by a creator
pub async fn list_inventory(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<ContestResponse>>> {
    let contests = ContestService::list_by_creator(state.contests(), &email).await?;
    Ok(Json(contests))
}
