/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Check that `usuario` and `password` are present
 * 2. Look up the user by username
 * 3. Verify the password using bcrypt
 * 4. Issue a token carrying the user's id
 *
 * An unknown username and a wrong password produce different messages, so
 * a caller can tell whether an account exists.
 */

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
};

use crate::backend::auth::handlers::body::read_body;
use crate::backend::auth::handlers::types::{messages, LoginRequest, LoginResponse};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::{Claims, TokenService};
use crate::backend::error::BackendError;
use crate::backend::server::state::SharedUserStore;
use crate::shared::error::require;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - JSON content type with a body that does not parse
/// * `422 Unprocessable Entity` - Missing field, unknown user, or wrong password
/// * `500 Internal Server Error` - Store, hash verification, or token signing failure
///
/// # Example Response
///
/// ```json
/// { "msg": "Autenticado com sucesso", "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(users): State<SharedUserStore>,
    State(hasher): State<PasswordHasher>,
    State(tokens): State<TokenService>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<LoginResponse>), BackendError> {
    let request: LoginRequest = read_body(&headers, &body)?;

    let usuario = require(request.usuario.as_deref(), "usuario", messages::USERNAME_REQUIRED)?;
    let password = require(request.password.as_deref(), "password", messages::PASSWORD_REQUIRED)?;

    tracing::info!("Login request for: {}", usuario);

    let user = users
        .find_by_username(usuario)
        .await
        .map_err(|e| BackendError::internal(messages::SERVER_ERROR, e))?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", usuario);
            BackendError::auth(StatusCode::UNPROCESSABLE_ENTITY, messages::USER_NOT_FOUND)
        })?;

    let valid = hasher
        .verify(password, &user.password_hash)
        .await
        .map_err(|e| BackendError::internal(messages::SERVER_ERROR, e))?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", usuario);
        return Err(BackendError::auth(
            StatusCode::UNPROCESSABLE_ENTITY,
            messages::INVALID_PASSWORD,
        ));
    }

    let token = tokens
        .issue(&Claims::for_user(user.id.to_string()))
        .map_err(|e| BackendError::internal(messages::SERVER_ERROR, e))?;

    tracing::info!("User logged in successfully: {} ({})", user.usuario, user.id);

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            msg: messages::AUTHENTICATED.to_string(),
            token,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::handlers::testing::{json_body, seed_user, test_state, FailingStore};
    use crate::backend::server::state::AppState;
    use std::sync::Arc;

    fn request(usuario: Option<&str>, password: Option<&str>) -> LoginRequest {
        LoginRequest {
            usuario: usuario.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    async fn call(state: &AppState, body: LoginRequest) -> Result<(StatusCode, Json<LoginResponse>), BackendError> {
        let (headers, body) = json_body(&body);
        login(
            State(state.users.clone()),
            State(state.hasher),
            State(state.tokens.clone()),
            headers,
            body,
        )
        .await
    }

    fn expect_message(result: Result<(StatusCode, Json<LoginResponse>), BackendError>, status: StatusCode, msg: &str) {
        let err = result.unwrap_err();
        assert_eq!(err.status_code(), status);
        assert_eq!(err.message(), msg);
    }

    #[tokio::test]
    async fn test_login_success() {
        let state = test_state();
        let user = seed_user(&state, "alice", "secret1").await;

        let (status, Json(body)) = call(&state, request(Some("alice"), Some("secret1")))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.msg, messages::AUTHENTICATED);
        let claims = state.tokens.verify(&body.token).unwrap();
        assert_eq!(claims.id, user.id.to_string());
    }

    #[tokio::test]
    async fn test_login_missing_username() {
        let result = call(&test_state(), request(None, Some("p"))).await;
        expect_message(result, StatusCode::UNPROCESSABLE_ENTITY, messages::USERNAME_REQUIRED);
    }

    #[tokio::test]
    async fn test_login_missing_password() {
        let result = call(&test_state(), request(Some("alice"), Some(""))).await;
        expect_message(result, StatusCode::UNPROCESSABLE_ENTITY, messages::PASSWORD_REQUIRED);
    }

    #[tokio::test]
    async fn test_login_user_not_found() {
        let result = call(&test_state(), request(Some("ghost"), Some("p"))).await;
        expect_message(result, StatusCode::UNPROCESSABLE_ENTITY, messages::USER_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_login_invalid_password() {
        let state = test_state();
        seed_user(&state, "alice", "secret1").await;

        let result = call(&state, request(Some("alice"), Some("wrong"))).await;
        expect_message(result, StatusCode::UNPROCESSABLE_ENTITY, messages::INVALID_PASSWORD);
    }

    #[tokio::test]
    async fn test_login_without_secret_is_server_error() {
        let mut state = test_state();
        seed_user(&state, "alice", "secret1").await;
        state.tokens = TokenService::new("");

        let result = call(&state, request(Some("alice"), Some("secret1"))).await;
        expect_message(result, StatusCode::INTERNAL_SERVER_ERROR, messages::SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_login_corrupt_stored_hash_is_server_error() {
        let state = test_state();
        state.users.insert("broken", "plain-text").await.unwrap();

        let result = call(&state, request(Some("broken"), Some("plain-text"))).await;
        expect_message(result, StatusCode::INTERNAL_SERVER_ERROR, messages::SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_login_store_failure_is_generic() {
        let mut state = test_state();
        state.users = Arc::new(FailingStore);

        let result = call(&state, request(Some("alice"), Some("secret1"))).await;
        expect_message(result, StatusCode::INTERNAL_SERVER_ERROR, messages::SERVER_ERROR);
    }
}
