use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::error;

use crate::storage::StoreError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug)]
pub enum AppError {
    MissingIdentity,
    InvalidCredential(String),
    IncompleteSubmission,
    DuplicateVote,
    NotFound(String),
    InvalidReactionType(String),
    Validation(String),
    StorageUnavailable(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingIdentity => write!(f, "Voter identification is missing"),
            AppError::InvalidCredential(msg) => write!(f, "Invalid credential: {}", msg),
            AppError::IncompleteSubmission => write!(f, "No criteria scores were given"),
            AppError::DuplicateVote => write!(f, "A vote was already recorded for this voter today"),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InvalidReactionType(value) => {
                write!(f, "Invalid reaction type: '{}'", value)
            }
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::StorageUnavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            AppError::MissingIdentity => (
                StatusCode::BAD_REQUEST,
                "MISSING_IDENTITY",
                "Voter identification is missing".to_string(),
            ),
            AppError::InvalidCredential(msg) => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIAL",
                msg,
            ),
            AppError::IncompleteSubmission => (
                StatusCode::BAD_REQUEST,
                "INCOMPLETE_SUBMISSION",
                "At least one criterion score is required".to_string(),
            ),
            AppError::DuplicateVote => (
                StatusCode::CONFLICT,
                "DUPLICATE_VOTE",
                "A vote was already recorded for this voter today".to_string(),
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                msg,
            ),
            AppError::InvalidReactionType(value) => (
                StatusCode::BAD_REQUEST,
                "INVALID_REACTION_TYPE",
                format!("Reaction type must be 'like' or 'dislike', got '{}'", value),
            ),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg,
            ),
            AppError::StorageUnavailable(msg) => {
                error!("storage failure: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_UNAVAILABLE",
                    "Storage operation failed".to_string(),
                )
            }
        };

        let error_response = ErrorResponse {
            error: error_type.to_string(),
            message,
            details: None,
        };

        (status, Json(error_response)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::StorageUnavailable(err.to_string())
    }
}
