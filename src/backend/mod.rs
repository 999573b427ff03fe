//! Backend Module
//!
//! This module contains all server-side code: the Axum application, the
//! auth handlers, the access middleware and the user store adapters.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Application state, database bootstrap, app assembly
//! - **`routes`** - HTTP route table and router creation
//! - **`auth`** - Password hashing, tokens, user store, handlers
//! - **`middleware`** - Bearer-token check for protected routes
//! - **`error`** - Backend error type and its HTTP rendering
//!
//! # Request Flow
//!
//! ```text
//! request ─► (protected routes) auth_middleware ─► handler
//!                                                   ├─► UserStore
//!                                                   ├─► PasswordHasher
//!                                                   └─► TokenService
//!         ◄─ JSON body + status code ◄──────────────┘
//! ```
//!
//! # State Management
//!
//! `AppState` holds an `Arc<dyn UserStore>`, a `TokenService` and a
//! `PasswordHasher`. None of them change after startup, so no locks are
//! involved in request handling.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::BackendError;
pub use routes::create_router;
pub use server::{create_app, AppState};
