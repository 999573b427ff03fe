//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for the auth endpoints and the
//! protected user lookup.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── body.rs      - Lenient request body reading
//! ├── types.rs     - Request/response types and client messages
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! └── user.rs      - Protected user lookup handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /auth/register - User registration
//! - **`login`** - POST /auth/login - Token issuance
//! - **`get_user`** - GET /user/{id} - User lookup (behind `auth_middleware`)
//!
//! Every handler returns `Result<_, BackendError>`; errors become a JSON
//! `{"msg": ...}` body at the boundary.

/// Request body reading
pub mod body;

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Protected user lookup handler
pub mod user;

// Re-export commonly used types
pub use types::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserResponse};

// Re-export handlers
pub use login::login;
pub use register::register;
pub use user::get_user;
