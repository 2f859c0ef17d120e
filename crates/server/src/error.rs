// crates/server/src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use icd_tagger_core::llm::LlmError;
use icd_tagger_core::{ClassifyError, DatasetError};
use serde::Serialize;
use thiserror::Error;

/// Structured JSON error response for API errors
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// API error types that map to HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Classification error: {0}")]
    Classify(#[from] ClassifyError),

    #[error("No classified dataset available")]
    NoResult,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            ApiError::InvalidUpload(msg) => {
                tracing::warn!(message = %msg, "Invalid upload");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Invalid upload", msg.clone()),
                )
            }
            ApiError::Dataset(err) => {
                tracing::warn!(error = %err, "Could not parse CSV upload");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Could not parse CSV upload", err.to_string()),
                )
            }
            ApiError::Classify(ClassifyError::MissingColumn { name }) => {
                tracing::warn!(column = %name, "Required column missing");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details(
                        format!("CSV must contain a '{}' column", name),
                        "No rows were classified",
                    ),
                )
            }
            ApiError::Classify(ClassifyError::Completion { row, source }) => match source {
                LlmError::MissingApiKey => {
                    tracing::error!("Completion service not configured");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorResponse::with_details(
                            "Completion service not configured",
                            source.to_string(),
                        ),
                    )
                }
                _ => {
                    tracing::error!(row = row, error = %source, "Completion call failed");
                    (
                        StatusCode::BAD_GATEWAY,
                        ErrorResponse::with_details(
                            format!("Completion failed at row {}", row),
                            source.to_string(),
                        ),
                    )
                }
            },
            ApiError::NoResult => {
                tracing::warn!("Download requested before any completed run");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new("No classified dataset available"),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(message = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
