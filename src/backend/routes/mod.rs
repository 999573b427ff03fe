//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! - **`router`** - Main router creation, fallback and tracing layer
//! - **`api_routes`** - The route table and the small root/fallback handlers
//!
//! # Routes
//!
//! - `GET /` - Liveness message
//! - `POST /auth/register` - User registration
//! - `POST /auth/login` - User login
//! - `GET /user/{id}` - User lookup (bearer token required)

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
