/**
 * Server Configuration
 *
 * This module opens the PostgreSQL connection pool the user store runs on
 * and applies the migrations.
 *
 * # Error Handling
 *
 * The user store needs the database, so a failed connection or a failed
 * migration is returned to the caller, which aborts startup.
 */

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::shared::config::AppConfig;

/// Maximum pooled connections
const MAX_CONNECTIONS: u32 = 10;

/// How long to wait for a connection before giving up
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Open the database pool and apply migrations
///
/// This function:
/// 1. Creates a PostgreSQL connection pool from `config.database_url`
/// 2. Runs the migrations in `migrations/`
pub async fn load_database(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(&config.database_url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database connection pool: {}", e);
            e
        })?;

    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        sqlx::Error::from(e)
    })?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
