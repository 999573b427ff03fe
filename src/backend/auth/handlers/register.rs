/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Check that `usuario`, `password` and `confirmpassword` are present
 * 2. Check that `password` equals `confirmpassword`
 * 3. Check that the username is free
 * 4. Hash the password with bcrypt
 * 5. Insert the user
 *
 * The first failing check decides the response. The free-username check and
 * the insert are separate store calls, so a concurrent registration can
 * still win in between; the store's duplicate-key error is reported the same
 * way as a failed pre-check.
 */

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
};

use crate::backend::auth::handlers::body::read_body;
use crate::backend::auth::handlers::types::{messages, MessageResponse, RegisterRequest};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::users::StoreError;
use crate::backend::error::BackendError;
use crate::backend::server::state::SharedUserStore;
use crate::shared::error::require;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - JSON content type with a body that does not parse
/// * `422 Unprocessable Entity` - Missing field, password mismatch, or username taken
/// * `500 Internal Server Error` - Store or hashing failure (generic message)
///
/// # Example Request
///
/// ```http
/// POST /auth/register HTTP/1.1
/// Content-Type: application/json
///
/// { "usuario": "alice", "password": "secret1", "confirmpassword": "secret1" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "msg": "Usuário criado com sucesso" }
/// ```
pub async fn register(
    State(users): State<SharedUserStore>,
    State(hasher): State<PasswordHasher>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    let request: RegisterRequest = read_body(&headers, &body)?;

    let usuario = require(request.usuario.as_deref(), "usuario", messages::USERNAME_REQUIRED)?;
    let password = require(request.password.as_deref(), "password", messages::PASSWORD_REQUIRED)?;
    let confirmation = require(
        request.confirmpassword.as_deref(),
        "confirmpassword",
        messages::CONFIRMATION_REQUIRED,
    )?;

    if password != confirmation {
        tracing::warn!("Password confirmation mismatch for: {}", usuario);
        return Err(BackendError::validation(messages::PASSWORD_MISMATCH));
    }

    tracing::info!("Register request for: {}", usuario);

    let existing = users
        .find_by_username(usuario)
        .await
        .map_err(|e| BackendError::internal(messages::REGISTER_FAILED, e))?;
    if existing.is_some() {
        tracing::warn!("Username already exists: {}", usuario);
        return Err(BackendError::conflict(messages::USER_EXISTS));
    }

    let password_hash = hasher
        .hash(password)
        .await
        .map_err(|e| BackendError::internal(messages::REGISTER_FAILED, e))?;

    let user = users
        .insert(usuario, &password_hash)
        .await
        .map_err(|e| match e {
            StoreError::DuplicateKey { .. } => {
                tracing::warn!("Username taken between check and insert: {}", usuario);
                BackendError::conflict(messages::USER_EXISTS)
            }
            other => BackendError::internal(messages::REGISTER_FAILED, other),
        })?;

    tracing::info!("User created successfully: {} ({})", user.usuario, user.id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(messages::USER_CREATED)),
    ))
}
