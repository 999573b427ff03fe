/**
 * Request Body Reading
 *
 * The auth endpoints read their bodies leniently. Presence checks in the
 * handlers decide the response, not the shape of the JSON:
 *
 * - no body, an empty body, or a content type other than `application/json`
 *   reads as `{}`
 * - a JSON value that is not an object reads as `{}`
 * - only bytes that are not valid JSON are rejected (400)
 *
 * Field values are read as text: strings as-is, other scalars through their
 * JSON rendering. `null`, `false` and `0` count as absent.
 */

use axum::{
    body::Bytes,
    http::{header::CONTENT_TYPE, HeaderMap},
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use crate::backend::error::BackendError;
use crate::shared::SharedError;

const INVALID_BODY: &str = "Corpo da requisição inválido";

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// Read a request body into `T`, falling back to `T::default()`
///
/// # Errors
///
/// 400 when the content type is JSON but the bytes do not parse.
pub fn read_body<T>(headers: &HeaderMap, body: &Bytes) -> Result<T, BackendError>
where
    T: DeserializeOwned + Default,
{
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Rejected request body: {}", e);
        BackendError::SharedError(SharedError::serialization(INVALID_BODY))
    })?;

    match value {
        Value::Object(_) => serde_json::from_value(value).map_err(|e| {
            tracing::warn!("Rejected request body: {}", e);
            BackendError::validation(INVALID_BODY)
        }),
        _ => Ok(T::default()),
    }
}

/// Deserialize an optional field as text
pub fn text_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }))
}
