pub mod catalog;

use axum::Json;

use crate::error::AppError;
use crate::models::StatusResponse;

pub const STATUS_MESSAGE: &str = "API is running";

pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: STATUS_MESSAGE.to_string(),
    })
}

/// Fallback for paths no route matches.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
