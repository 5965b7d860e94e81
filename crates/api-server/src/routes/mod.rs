//! Route handlers

use axum::{http::StatusCode, Json};

pub mod health;
pub mod profile;
pub mod summarize;
pub mod todos;

use todos::ErrorResponse;

/// Fallback for unmatched method/path combinations
pub async fn not_found_fallback() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
}
