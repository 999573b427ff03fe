//! Common test utilities and helpers
//!
//! - Authentication test helpers (server over an in-memory store)
//! - Custom assertion macros
//! - PostgreSQL fixtures for the `#[ignore]`d database tests
#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
