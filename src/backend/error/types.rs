/**
 * Backend Error Types
 *
 * This module defines the error returned by every HTTP handler and by the
 * access middleware. Each variant carries the message the client sees and
 * maps to one HTTP status code.
 *
 * # Error Categories
 *
 * - `ValidationError` - Missing or contradictory input (422)
 * - `AuthError` - Missing/invalid token or bad credentials (400/401/422)
 * - `NotFoundError` - Record absent (404)
 * - `ConflictError` - Username already taken (422)
 * - `InternalError` - Unexpected store, hashing or signing failure (500)
 *
 * Internal errors keep their cause in `detail` for the server log; only
 * `message` reaches the response body.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// ```rust
/// use authgate::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::auth(StatusCode::UNAUTHORIZED, "Acesso negado!");
/// assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing or contradictory client input
    #[error("Validation error: {message}")]
    ValidationError {
        /// Human-readable error message
        message: String,
    },

    /// Authentication failure (token or credentials)
    #[error("Authentication error: {message}")]
    AuthError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Requested record does not exist
    #[error("Not found: {message}")]
    NotFoundError {
        /// Human-readable error message
        message: String,
    },

    /// Record already exists
    #[error("Conflict: {message}")]
    ConflictError {
        /// Human-readable error message
        message: String,
    },

    /// Unexpected failure
    ///
    /// `message` is the generic text returned to the client and `detail`
    /// is the underlying cause, logged when the response is built.
    #[error("Internal error: {detail}")]
    InternalError {
        /// Generic message safe to return
        message: String,
        /// Underlying cause, server-side only
        detail: String,
    },

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Create a new authentication error with a status code
    pub fn auth(status: StatusCode, message: impl Into<String>) -> Self {
        Self::AuthError {
            status,
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFoundError {
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::ConflictError {
            message: message.into(),
        }
    }

    /// Create a new internal error from a public message and a private cause
    pub fn internal(message: impl Into<String>, detail: impl std::fmt::Display) -> Self {
        Self::InternalError {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `ValidationError` - 422 Unprocessable Entity
    /// - `AuthError` - Uses the status code from the error
    /// - `NotFoundError` - 404 Not Found
    /// - `ConflictError` - 422 Unprocessable Entity
    /// - `InternalError` - 500 Internal Server Error
    /// - `SharedError` - 422 for validation, 400 for malformed JSON
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::AuthError { status, .. } => *status,
            Self::NotFoundError { .. } => StatusCode::NOT_FOUND,
            Self::ConflictError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                SharedError::SerializationError { .. } => StatusCode::BAD_REQUEST,
            },
        }
    }

    /// Get the client-facing message
    pub fn message(&self) -> String {
        match self {
            Self::ValidationError { message } => message.clone(),
            Self::AuthError { message, .. } => message.clone(),
            Self::NotFoundError { message } => message.clone(),
            Self::ConflictError { message } => message.clone(),
            Self::InternalError { message, .. } => message.clone(),
            Self::SharedError(err) => err.user_message().to_string(),
        }
    }
}
