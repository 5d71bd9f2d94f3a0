use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::state::AppState;
use crate::users::dto::{UserRequest, UserResponse};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create))
        .route("/users/:id", get(get_user).put(update).delete(delete_user))
}

/// Path ids are extracted raw so the client sees one stable message for any
/// non-integer value instead of the framework's rejection text.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| {
        warn!(id = %raw, "invalid id path parameter");
        ApiError::InvalidIdParam
    })
}

#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "could not decode request body");
        ApiError::InvalidBody
    })?;

    let user = state.users.create(payload).await?;
    info!(user_id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_id(&id)?;
    let user = state.users.get(id).await?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_id(&id)?;
    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "could not decode request body");
        ApiError::InvalidBody
    })?;

    let user = state.users.update(id, payload).await?;
    info!(user_id = user.id, "user updated");
    Ok(Json(user.into()))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    state.users.delete(id).await?;
    info!(user_id = id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
