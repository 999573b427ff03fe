/**
 * Authentication Middleware
 *
 * This module guards the protected routes. It reads a bearer token from
 * the Authorization header, verifies it, and either rejects the request or
 * passes it on with the token's claims attached.
 *
 * # Outcomes
 *
 * - no header, another scheme than `Bearer`, or an empty token: 401 `Acesso negado!`
 * - token present but not valid: 400 `Token Inválido`
 * - token valid: the request continues with an `AuthenticatedUser` extension
 */

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::handlers::types::messages;
use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;

/// Authenticated user data extracted from the token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The `id` claim
    pub user_id: String,
    /// The `iat` claim
    pub issued_at: u64,
}

/// Extract the bearer token from request headers
///
/// The scheme name is matched case-insensitively (`Bearer`, `bearer`).
/// Returns `None` when the header is missing, is not valid UTF-8, uses
/// another scheme, or carries an empty token.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies the token
/// 3. Attaches the claims to request extensions for use in handlers
pub async fn auth_middleware(
    State(tokens): State<TokenService>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing bearer token on {}", request.uri().path());
        BackendError::auth(StatusCode::UNAUTHORIZED, messages::ACCESS_DENIED)
    })?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::auth(StatusCode::BAD_REQUEST, messages::INVALID_TOKEN)
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.id,
        issued_at: claims.iat,
    });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::sessions::Claims;
    use axum::{body::Body, middleware::from_fn_with_state, routing::get, Extension, Router};
    use tower::ServiceExt;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        assert_eq!(bearer_token(&headers_with("Bearer abc.def.ghi")), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        assert_eq!(bearer_token(&headers_with("bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(bearer_token(&headers_with("BEARER abc.def.ghi")), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_absent_cases() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers_with("abc.def.ghi")), None);
        assert_eq!(bearer_token(&headers_with("Basic dXNlcjpwdw==")), None);
        assert_eq!(bearer_token(&headers_with("Bearer ")), None);
        assert_eq!(bearer_token(&headers_with("Bearer    ")), None);
    }

    fn guarded_app(tokens: TokenService) -> Router {
        Router::new()
            .route(
                "/guarded",
                get(|Extension(user): Extension<AuthenticatedUser>| async move { user.user_id }),
            )
            .route_layer(from_fn_with_state(tokens.clone(), auth_middleware))
            .with_state(tokens)
    }

    async fn status_for(app: Router, authorization: Option<&str>) -> (StatusCode, String) {
        let mut builder = axum::http::Request::builder().uri("/guarded");
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        let response = app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_missing_token_is_unauthorized() {
        let (status, body) = status_for(guarded_app(TokenService::new("k")), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains(messages::ACCESS_DENIED));
    }

    #[tokio::test]
    async fn test_invalid_token_is_bad_request() {
        let (status, body) =
            status_for(guarded_app(TokenService::new("k")), Some("Bearer not-a-token")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains(messages::INVALID_TOKEN));
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler_with_claims() {
        let tokens = TokenService::new("k");
        let token = tokens.issue(&Claims::for_user("user-42")).unwrap();

        let (status, body) =
            status_for(guarded_app(tokens), Some(&format!("Bearer {}", token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "user-42");
    }
}
