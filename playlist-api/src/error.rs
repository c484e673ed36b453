//! Error types for playlist-api

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use playlist_common::Error as CommonError;
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// playlist-common error
    #[error(transparent)]
    Common(#[from] CommonError),
}

// Malformed query strings and bodies get the same JSON error shape as
// domain errors instead of axum's plain-text rejection.
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Common(CommonError::InvalidInput(rejection.body_text()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Common(CommonError::InvalidInput(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::Common(err) => {
                let (status, code) = match &err {
                    CommonError::InvalidRating(_) => (StatusCode::BAD_REQUEST, "INVALID_RATING"),
                    CommonError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
                    CommonError::NotReady => (StatusCode::SERVICE_UNAVAILABLE, "NOT_READY"),
                    CommonError::EmptyTable => (StatusCode::NOT_FOUND, "EMPTY_TABLE"),
                    CommonError::MalformedInput(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "MALFORMED_INPUT")
                    }
                    CommonError::Config(_) | CommonError::Io(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
                    }
                };
                (status, code, err.to_string())
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
