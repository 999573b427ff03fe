//! Shared Types Module
//!
//! Types that do not depend on the server stack: process configuration
//! and input validation errors.
//!
//! - **`config`** - `AppConfig`, its builder and `ConfigError`
//! - **`error`** - `SharedError` and the field presence check

/// Application configuration
pub mod config;

/// Shared error types
pub mod error;

pub use config::{AppConfig, ConfigError};
pub use error::SharedError;
