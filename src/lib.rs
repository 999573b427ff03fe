//! authgate - Minimal HTTP Authentication Service
//!
//! authgate registers users with bcrypt-hashed credentials, authenticates
//! them, issues bearer tokens, and guards a user lookup behind token
//! verification.
//!
//! # Module Structure
//!
//! - **`shared`** - Configuration and validation errors
//! - **`backend`** - Axum server, handlers, middleware, store adapters
//!   (only compiled with the `ssr` feature, which is on by default)
//!
//! # HTTP Surface
//!
//! | Method | Path | Auth | Success |
//! |---|---|---|---|
//! | GET | `/` | none | 200 `{msg}` |
//! | POST | `/auth/register` | none | 201 `{msg}` |
//! | POST | `/auth/login` | none | 200 `{msg, token}` |
//! | GET | `/user/{id}` | bearer token | 200 `{user}` |
//!
//! # Usage
//!
//! ```rust,no_run
//! use authgate::backend::server::create_app;
//! use authgate::shared::config::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! For tests and embedding, build the router directly over an in-memory
//! store:
//!
//! ```rust
//! use std::sync::Arc;
//! use authgate::backend::auth::{MemoryUserStore, PasswordHasher, TokenService};
//! use authgate::backend::{create_router, AppState};
//!
//! let state = AppState::new(
//!     Arc::new(MemoryUserStore::new()),
//!     TokenService::new("dev-secret"),
//!     PasswordHasher::new(),
//! );
//! let _app = create_router(state);
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
