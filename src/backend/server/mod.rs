//! Server Module
//!
//! This module contains the code that turns configuration into a running
//! Axum application.
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - Database pool creation and migrations
//! - **`init`** - Application assembly and startup errors
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::from_env()` (in the binary)
//! 2. **Database**: pool + migrations; failure aborts startup
//! 3. **State Creation**: store, token service, hasher
//! 4. **Router Creation**: routes, auth middleware, fallback, tracing

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{create_app, StartupError};
pub use state::{AppState, SharedUserStore};
