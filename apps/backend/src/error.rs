//! Error handling for the backend API

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use flashcard_core::FlashcardError;
use serde::Serialize;
use thiserror::Error;

use crate::services::preferences::PreferenceError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Flashcard(#[from] FlashcardError),

    #[error("Preferences error: {0}")]
    Preferences(#[from] PreferenceError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Flashcard(FlashcardError::EmptyInput) => {
                (StatusCode::BAD_REQUEST, "empty_input")
            }
            ApiError::Flashcard(FlashcardError::InvalidState { .. }) => {
                (StatusCode::CONFLICT, "invalid_state")
            }
            ApiError::Flashcard(FlashcardError::NoCurrentCard) => {
                (StatusCode::CONFLICT, "no_current_card")
            }
            ApiError::Flashcard(FlashcardError::InvalidCard(_)) => {
                (StatusCode::BAD_REQUEST, "invalid_card")
            }
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Preferences(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
