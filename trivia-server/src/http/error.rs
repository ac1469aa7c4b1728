//! API error types with IntoResponse
//!
//! Every failure renders the same envelope:
//! `{"success": false, "error": <status>, "error message": <text>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request or missing selector fields (400)
    BadRequest { reason: String },

    /// Lookup miss or empty result (404)
    NotFound { resource: &'static str, id: String },

    /// Route exists but not for this method (405)
    MethodNotAllowed,

    /// Create validation failed or a write went wrong (422)
    Unprocessable { reason: String },

    /// Unexpected failure outside the write paths (500)
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest {
            reason: reason.into(),
        }
    }

    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Collapse any error into a 422.
    pub fn unprocessable(err: impl std::fmt::Display) -> Self {
        Self::Unprocessable {
            reason: err.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message for the status code.
    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "bad request",
            Self::NotFound { .. } => "resource not found",
            Self::MethodNotAllowed => "method not allowed",
            Self::Unprocessable { .. } => "unprocessable",
            Self::Internal { .. } => "internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal { message } => tracing::error!("Internal error: {}", message),
            Self::BadRequest { reason } | Self::Unprocessable { reason } => {
                tracing::debug!(status = status.as_u16(), %reason, "request rejected")
            }
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, %id, "resource not found")
            }
            Self::MethodNotAllowed => {}
        }

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "error message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::unprocessable(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}
