use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::errors::ApiError;

/// Backends answer either with the payload itself or wrapped as
/// `{ "status", "message", "data": <payload> }`.
pub fn from_envelope<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    let payload = match body {
        Value::Object(mut map) if map.get("data").is_some_and(Value::is_object) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };

    serde_json::from_value(payload).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}
