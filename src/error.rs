use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::models::ValidationError;
use crate::store::StoreError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("database not configured")]
    StoreUnavailable,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "validation failed", "details": err.issues }),
            ),
            AppError::StoreUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Database not configured" }),
            ),
            AppError::Store(err) => {
                // The concrete failure stays in the log; callers get an
                // opaque server error.
                error!(error = %err, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal database error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
