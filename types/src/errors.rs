//! Error types for the FitTrack application

use thiserror::Error;

use crate::api::ApiResponse;

/// Application-wide error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors collapse into the failure variant of the response envelope, so
/// service layers can propagate with `?` and convert at the boundary.
impl<T> From<AppError> for ApiResponse<T> {
    fn from(err: AppError) -> Self {
        ApiResponse::error(err.to_string())
    }
}
