//! Application error types with HTTP status code mapping.
//!
//! [`AppError`] has exactly two kinds: a client-side validation failure and
//! a server-side persistence failure. Both render as `{"error": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// JSON error response body.
///
/// ```json
/// { "error": "All fields are required." }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Request-level error enum.
///
/// | Variant       | HTTP Status               |
/// |---------------|---------------------------|
/// | `Validation`  | 400 Bad Request           |
/// | `Persistence` | 500 Internal Server Error |
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// A required field is missing; nothing was persisted.
    #[error("{0}")]
    Validation(String),

    /// The feedback database could not be reached or rejected a statement.
    /// Carries the raw driver message.
    #[error("{0}")]
    Persistence(String),
}

impl AppError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
