/**
 * authgate Server Entry Point
 *
 * Loads configuration, connects to the database, and serves the auth API.
 * Startup stops with a non-zero exit if configuration or the database fails.
 */

use authgate::backend::server::{create_app, StartupError};
use authgate::shared::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = AppConfig::from_env()?;
    let app = create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
