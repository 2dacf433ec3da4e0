use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token is not a three-part JWT")]
    Malformed,

    #[error("Token payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Token payload is not valid claims JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Token has no exp claim")]
    MissingExpiry,
}
