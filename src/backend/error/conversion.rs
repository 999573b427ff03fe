/**
 * Error Conversion
 *
 * This module turns backend errors into HTTP responses.
 *
 * # Response Format
 *
 * Error responses are JSON with a single human-readable field:
 * ```json
 * { "msg": "Token Inválido" }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    /// Convert a backend error into an HTTP response
    ///
    /// Internal errors are logged with their detail here, so handlers only
    /// have to build the error.
    fn into_response(self) -> Response {
        if let BackendError::InternalError { detail, .. } = &self {
            tracing::error!("Internal error: {}", detail);
        }

        let status = self.status_code();
        let body = serde_json::json!({ "msg": self.message() });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_renders_msg_body() {
        let response =
            BackendError::auth(StatusCode::UNAUTHORIZED, "Acesso negado!").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "msg": "Acesso negado!" }));
    }

    #[tokio::test]
    async fn test_internal_error_body_is_generic() {
        let response =
            BackendError::internal("Erro inesperado", "duplicate key in index users_pkey")
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["msg"], "Erro inesperado");
        assert!(!body.to_string().contains("users_pkey"));
    }
}
