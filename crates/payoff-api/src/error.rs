//! API error types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use payoff_core::PayoffError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body could not be parsed as a list of contracts.
    #[error("Invalid request")]
    InvalidRequest,

    /// Contracts parsed but failed validation. Holds the client-facing
    /// category, never the offending value.
    #[error("{0}")]
    Validation(String),
}

/// Error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<PayoffError> for ApiError {
    fn from(err: PayoffError) -> Self {
        ApiError::Validation(err.category().to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        ApiError::InvalidRequest
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
