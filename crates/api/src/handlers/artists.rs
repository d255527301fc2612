//! Handlers for the `/artists` endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::dto::{ArtistDto, ArtistInput};
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;
use crate::validation;

/// GET /artists
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ArtistDto>>, ApiError> {
    Ok(Json(state.artists.list().await?))
}

/// GET /artists/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ArtistDto>, ApiError> {
    Ok(Json(state.artists.get_by_id(id).await?))
}

/// POST /artists
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ArtistInput>,
) -> Result<(StatusCode, Json<ArtistDto>), ApiError> {
    let violations = validation::validate_artist_input(&input);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let created = state.artists.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /artists/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(input): JsonBody<ArtistInput>,
) -> Result<Json<ArtistDto>, ApiError> {
    let violations = validation::validate_artist_input(&input);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    Ok(Json(state.artists.update(id, input).await?))
}

/// DELETE /artists/{id}. Idempotent: 204 whether or not the row existed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.artists.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
