//! Authentication Module
//!
//! This module handles user registration, credential checks and bearer
//! tokens. It provides the HTTP handlers for the auth endpoints and the
//! pieces they are built from.
//!
//! # Architecture
//!
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT issuance and verification
//! - **`users`** - User model, `UserStore` trait, Postgres and in-memory stores
//! - **`handlers`** - HTTP handlers for the endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password + confirmation → password hashed → user stored
//! 2. **Login**: username + password → hash verified → token returned
//! 3. **Get User**: token verified by middleware → user record returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (work factor 12) before storage
//! - Passwords and hashes are never logged or returned
//! - Tokens are stateless and carry no expiration
//!
//! # Example
//!
//! ```rust,no_run
//! use authgate::backend::auth::{get_user, login, register};
//! use authgate::backend::server::state::AppState;
//! use axum::{routing::{get, post}, Router};
//!
//! # fn example() -> Router<AppState> {
//! Router::new()
//!     .route("/auth/register", post(register))
//!     .route("/auth/login", post(login))
//!     .route("/user/{id}", get(get_user))
//! # }
//! ```

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// User model and store adapters
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserResponse};
pub use handlers::{get_user, login, register};
pub use password::{PasswordError, PasswordHasher};
pub use sessions::{Claims, TokenError, TokenService};
pub use users::{MemoryUserStore, PgUserStore, PublicUser, StoreError, User, UserStore};
