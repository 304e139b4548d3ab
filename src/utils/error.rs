//! Error Handling Utilities
//!
//! Error types and HTTP mapping for the user directory service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type covering business and infrastructure failures
#[derive(Error, Debug)]
pub enum ApiError {
    /// Unknown email or wrong password; the caller cannot tell which
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Requested resource does not exist (missing user, empty listing)
    #[error("{message}")]
    NotFound {
        message: String,
        details: Option<String>,
    },

    /// Duplicate resource (unique email violation)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Input validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing errors
    #[error("Password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Token signing or decoding errors
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Server misconfiguration (e.g. missing signing secret)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Not-found error with a caller-safe message only
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            details: None,
        }
    }

    /// Not-found error with an extra detail line (e.g. the requested id)
    pub fn not_found_with_details(
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        ApiError::NotFound {
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

/// Standard error response body for API endpoints
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ErrorBody::new("Invalid credentials"),
            ),
            ApiError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, ErrorBody { message, details })
            }
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, ErrorBody::new(&msg)),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorBody::new(&msg)),
            // Infrastructure failures: full detail stays in the server log,
            // only a sanitized message crosses the boundary.
            err @ (ApiError::Database(_)
            | ApiError::Hashing(_)
            | ApiError::Token(_)
            | ApiError::Configuration(_)
            | ApiError::Internal(_)) => {
                log::error!("internal error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new("Internal server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for operations that can return ApiError
pub type ApiResult<T> = Result<T, ApiError>;
