//! Unified error handling
//!
//! Provides the application error type and its HTTP mapping:
//! - [`AppError`] - application error enum
//! - [`ErrorBody`] - JSON error response structure
//!
//! Every business-rule failure is recovered at the request boundary and
//! turned into its status code; unexpected storage/runtime failures are
//! logged server-side and surfaced as a generic 500 body with no internal
//! detail.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// JSON error body.
///
/// ```json
/// { "error": "Phone number already exists! ...", "recordId": 42, "isDuplicate": true }
/// ```
///
/// `recordId`/`isDuplicate` only appear on the intake duplicate conflict.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(rename = "recordId", skip_serializing_if = "Option::is_none")]
    pub record_id: Option<i64>,
    #[serde(rename = "isDuplicate", skip_serializing_if = "Option::is_none")]
    pub is_duplicate: Option<bool>,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Authentication Errors (401) ==========
    #[error("No token provided")]
    Unauthorized,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Invalid email or password")]
    InvalidCredentials,

    // ========== Authorization Errors (403) ==========
    #[error("Permission denied: {0}")]
    Forbidden(String),

    // ========== Business Logic Errors (4xx) ==========
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource already exists: {0}")]
    Conflict(String),

    /// Intake duplicate: conflict surfaced as a decision point, carrying the
    /// existing record's id so the caller can switch to the update flow.
    #[error("Duplicate record {record_id}: {message}")]
    Duplicate { record_id: i64, message: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    // ========== System Errors (500) ==========
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            // Authentication errors (401)
            AppError::Unauthorized | AppError::InvalidToken | AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, ErrorBody::message(self.to_string()))
            }

            // Authorization errors (403)
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, ErrorBody::message(msg)),

            // Not found (404)
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody::message(msg)),

            // Conflict (409)
            AppError::Conflict(msg) => (StatusCode::CONFLICT, ErrorBody::message(msg)),
            AppError::Duplicate { record_id, message } => (
                StatusCode::CONFLICT,
                ErrorBody {
                    error: message,
                    record_id: Some(record_id),
                    is_duplicate: Some(true),
                },
            ),

            // Validation (400)
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorBody::message(msg)),

            // Database errors (500) - log detail, answer generically
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::message("Server error"),
                )
            }

            // Internal errors (500)
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::message("Server error"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl ErrorBody {
    fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            record_id: None,
            is_duplicate: None,
        }
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Intake duplicate conflict with the existing record's id
    pub fn duplicate(record_id: i64, msg: impl Into<String>) -> Self {
        Self::Duplicate {
            record_id,
            message: msg.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Unified bad-credentials error; never reveals whether the email exists
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials
    }
}
