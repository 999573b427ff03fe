//! Authentication test helpers
//!
//! Builds the real router over a `MemoryUserStore`, plus shortcuts for
//! registering users and logging in.

use std::sync::Arc;

use axum::http::{header::AUTHORIZATION, HeaderName, HeaderValue, StatusCode};
use axum_test::{TestResponse, TestServer};
use serde_json::json;

use authgate::backend::auth::{MemoryUserStore, PasswordHasher, TokenService};
use authgate::backend::{create_router, AppState};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Test server plus the state behind it
pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

/// Create a test server over an empty in-memory store
pub fn test_app() -> TestApp {
    test_app_with_secret(TEST_SECRET)
}

pub fn test_app_with_secret(secret: &str) -> TestApp {
    let state = AppState::new(
        Arc::new(MemoryUserStore::new()),
        TokenService::new(secret),
        PasswordHasher::with_cost(4),
    );
    let server = TestServer::new(create_router(state.clone())).expect("Failed to start test server");
    TestApp { server, state }
}

impl TestApp {
    pub async fn register(&self, usuario: &str, password: &str) -> TestResponse {
        self.server
            .post("/auth/register")
            .json(&json!({
                "usuario": usuario,
                "password": password,
                "confirmpassword": password,
            }))
            .await
    }

    pub async fn login(&self, usuario: &str, password: &str) -> TestResponse {
        self.server
            .post("/auth/login")
            .json(&json!({ "usuario": usuario, "password": password }))
            .await
    }

    /// Register then log in, returning the token
    pub async fn register_and_login(&self, usuario: &str, password: &str) -> String {
        let response = self.register(usuario, password).await;
        assert_eq!(response.status_code(), StatusCode::CREATED);

        let response = self.login(usuario, password).await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        body["token"].as_str().expect("token missing").to_string()
    }

    /// Id of a stored user, looked up directly in the store
    pub async fn user_id(&self, usuario: &str) -> String {
        self.state
            .users
            .find_by_username(usuario)
            .await
            .unwrap()
            .expect("user not stored")
            .id
            .to_string()
    }

    pub async fn get_user(&self, id: &str, authorization: Option<&str>) -> TestResponse {
        let mut request = self.server.get(&format!("/user/{}", id));
        if let Some(value) = authorization {
            request = request.add_header(auth_header_name(), header_value(value));
        }
        request.await
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

fn auth_header_name() -> HeaderName {
    AUTHORIZATION
}

fn header_value(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).expect("invalid header value")
}
