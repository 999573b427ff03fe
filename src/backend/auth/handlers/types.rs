/**
 * Authentication Handler Types
 *
 * Request and response bodies for the auth endpoints, plus the
 * client-facing messages each outcome produces.
 *
 * Request fields are all optional and read as text (see `body`), so a
 * missing or oddly typed field reaches the handler and gets its own message
 * instead of a generic deserialization error.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::handlers::body::text_field;
use crate::backend::auth::users::PublicUser;

/// Client-facing response messages
pub mod messages {
    pub const HELLO: &str = "Hello World";

    pub const USERNAME_REQUIRED: &str = "O usuário é obrigatório!";
    pub const PASSWORD_REQUIRED: &str = "A senha é obrigatória";
    pub const CONFIRMATION_REQUIRED: &str = "Por favor confirme a senha";
    pub const PASSWORD_MISMATCH: &str = "A senha é diferente da confirmação de senha";
    pub const USER_EXISTS: &str = "Usuário já existe";
    pub const USER_CREATED: &str = "Usuário criado com sucesso";
    pub const REGISTER_FAILED: &str = "Aconteceu um erro inesperado, por favor tente novamente";

    pub const USER_NOT_FOUND: &str = "Usuário não encontrado";
    pub const INVALID_PASSWORD: &str = "Senha inválida";
    pub const AUTHENTICATED: &str = "Autenticado com sucesso";
    pub const SERVER_ERROR: &str = "Aconteceu um erro inesperado no servidor, tente novamente";

    pub const ACCESS_DENIED: &str = "Acesso negado!";
    pub const INVALID_TOKEN: &str = "Token Inválido";

    pub const ROUTE_NOT_FOUND: &str = "Rota não encontrada";
}

/// Register request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    /// Desired username
    #[serde(default, deserialize_with = "text_field")]
    pub usuario: Option<String>,
    /// Plaintext password (hashed before storage)
    #[serde(default, deserialize_with = "text_field")]
    pub password: Option<String>,
    /// Must equal `password`
    #[serde(default, deserialize_with = "text_field")]
    pub confirmpassword: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "text_field")]
    pub usuario: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub password: Option<String>,
}

/// Plain message response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Login response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub msg: String,
    /// Bearer token for the protected routes (no expiration)
    pub token: String,
}

/// Protected user lookup response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub user: PublicUser,
}
