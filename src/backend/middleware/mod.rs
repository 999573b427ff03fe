//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer-token check in front of the protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use authgate::backend::middleware::auth_middleware;
//! use authgate::backend::server::state::AppState;
//! use axum::{middleware::from_fn_with_state, Router};
//!
//! # fn example(state: AppState, protected: Router<AppState>) -> Router<AppState> {
//! protected.route_layer(from_fn_with_state(state, auth_middleware))
//! # }
//! ```

pub mod auth;

pub use auth::{auth_middleware, bearer_token, AuthenticatedUser};
