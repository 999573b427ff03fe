//! Custom assertion macros
//!
//! Assertions over `axum_test::TestResponse` with messages that show the
//! response body on failure.

/// Assert a response's status and its `msg` field
#[macro_export]
macro_rules! assert_msg {
    ($response:expr, $status:expr, $msg:expr) => {{
        let response = &$response;
        let body: serde_json::Value = response.json();
        assert_eq!(
            response.status_code(),
            $status,
            "unexpected status, body: {}",
            body
        );
        assert_eq!(body["msg"], $msg, "unexpected msg, body: {}", body);
    }};
}

/// Assert that a JSON value has no key with this name at any depth
#[macro_export]
macro_rules! assert_no_key {
    ($value:expr, $key:expr) => {
        assert!(
            !$crate::common::assertions::contains_key(&$value, $key),
            "Expected no '{}' key in {}",
            $key,
            $value
        );
    };
}

pub fn contains_key(value: &serde_json::Value, key: &str) -> bool {
    match value {
        serde_json::Value::Object(map) => {
            map.contains_key(key) || map.values().any(|v| contains_key(v, key))
        }
        serde_json::Value::Array(items) => items.iter().any(|v| contains_key(v, key)),
        _ => false,
    }
}
