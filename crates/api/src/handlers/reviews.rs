//! Handlers for the `/reviews` endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::dto::{ReviewDto, ReviewInput};
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;
use crate::validation;

/// GET /reviews
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ReviewDto>>, ApiError> {
    Ok(Json(state.reviews.list().await?))
}

/// GET /reviews/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ReviewDto>, ApiError> {
    Ok(Json(state.reviews.get_by_id(id).await?))
}

/// POST /reviews
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ReviewInput>,
) -> Result<(StatusCode, Json<ReviewDto>), ApiError> {
    let violations = validation::validate_review_input(&input);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let created = state.reviews.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /reviews/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(input): JsonBody<ReviewInput>,
) -> Result<Json<ReviewDto>, ApiError> {
    let violations = validation::validate_review_input(&input);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    Ok(Json(state.reviews.update(id, input).await?))
}

/// DELETE /reviews/{id}. Idempotent: 204 whether or not the row existed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.reviews.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
