//! API-level error type and its HTTP mapping.
//!
//! One variant per failure class: invalid input, missing row, store
//! failure.  Handlers and services both return `ApiError`, so every
//! response path goes through the same `IntoResponse` mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use db::DbError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Input failed one or more declared field constraints.
    #[error("validation failed")]
    Validation(Vec<String>),

    /// The requested id has no matching row.
    #[error("{resource} with id {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// The store rejected an operation.
    #[error("database error: {0}")]
    Database(#[from] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": violations })),
            )
                .into_response(),
            ApiError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            ApiError::Database(err) => {
                // The store-side detail stays in the logs, not the response.
                tracing::error!(error = %err, "persistence failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
