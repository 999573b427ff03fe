/**
 * API Route Handlers
 *
 * This module defines the route table of the service.
 *
 * # Routes
 *
 * ## Public
 * - `GET /` - Liveness message
 * - `POST /auth/register` - User registration
 * - `POST /auth/login` - User login
 *
 * ## Protected (bearer token)
 * - `GET /user/{id}` - User lookup
 */

use axum::{
    http::StatusCode,
    middleware::from_fn_with_state,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::types::{messages, MessageResponse};
use crate::backend::auth::{get_user, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// The protected routes are built as their own router so the token check is
/// applied with `route_layer` to them alone.
pub fn configure_api_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/user/{id}", get(get_user))
        .route_layer(from_fn_with_state(app_state, auth_middleware));

    router
        .route("/", get(root))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .merge(protected)
}

/// GET / handler
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(messages::HELLO))
}

/// Fallback for unknown routes
pub async fn not_found() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::new(messages::ROUTE_NOT_FOUND)),
    )
}
