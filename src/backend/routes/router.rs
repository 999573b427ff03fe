/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (root, auth, protected user lookup)
 * 2. Fallback handler (JSON 404)
 * 3. Request tracing layer
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::{configure_api_routes, not_found};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the store, token service and hasher
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), app_state.clone());

    // Fallback handler for 404
    let router = router.fallback(not_found);

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
