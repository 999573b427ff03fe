/**
 * Server Initialization
 *
 * This module builds the Axum application from configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to PostgreSQL and run migrations
 * 2. Build `AppState` with the store, the token service and the hasher
 * 3. Create and configure the router
 *
 * Any failure is returned; the binary exits instead of listening.
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::users::PgUserStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::config::{AppConfig, ConfigError};

/// Errors that stop the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("failed to bind listener: {0}")]
    Io(#[from] std::io::Error),
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `StartupError::Database` when the store is unreachable.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing authgate backend server");

    let pool = load_database(config).await?;
    let users = Arc::new(PgUserStore::new(pool));

    if config.secret.is_empty() {
        tracing::warn!("Signing secret is empty; logins will fail with a server error");
    }

    let app_state = AppState::from_config(config, users);
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}
