//! Backend Error Module
//!
//! This module defines the error every handler returns and how it becomes
//! an HTTP response.
//!
//! - **`types`** - `BackendError` and its status mapping
//! - **`conversion`** - `IntoResponse` conversion to `{"msg": ...}` bodies
//!
//! # Error Types
//!
//! - `ValidationError` - missing or contradictory input (422)
//! - `AuthError` - token or credential failures (400/401/422)
//! - `NotFoundError` - absent record (404)
//! - `ConflictError` - username taken (422)
//! - `InternalError` - unexpected failures (500, generic message)
//!
//! # HTTP Response Conversion
//!
//! Every error renders as `{"msg": "..."}` with its status code, so no
//! failure escapes the handler boundary in another shape.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
