//! Shared Error Types
//!
//! This module defines error types that do not depend on the server stack.
//! They describe problems with the data a client sent, before any storage or
//! token work happens.
//!
//! # Error Categories
//!
//! - `ValidationError` - A required field is missing or contradicts another field
//! - `SerializationError` - JSON serialization/deserialization failures
//!
//! # Usage
//!
//! ```rust
//! use authgate::shared::error::SharedError;
//!
//! let error = SharedError::validation("usuario", "O usuário é obrigatório!");
//! assert_eq!(error.user_message(), "O usuário é obrigatório!");
//! ```
use thiserror::Error;

/// Errors raised while reading client input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The message shown to the client, without the field prefix
    pub fn user_message(&self) -> &str {
        match self {
            Self::SerializationError { message } => message,
            Self::ValidationError { message, .. } => message,
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

/// Returns the value when it is present and non-empty.
///
/// A field counts as missing when it is absent, `null`, or `""`.
pub fn require<'a>(
    value: Option<&'a str>,
    field: &str,
    message: &str,
) -> Result<&'a str, SharedError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(SharedError::validation(field, message)),
    }
}
