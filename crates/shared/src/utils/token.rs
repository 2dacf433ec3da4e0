use crate::{errors::TokenError, model::AccessClaims};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;

/// Decodes the payload segment of a JWT.
///
/// Neither the header nor the signature is looked at: the issuing backend
/// owns verification and this side only reads `role` and `exp` to route and
/// to decide when to refresh. Never use the result to grant access to data.
pub fn decode_claims(token: &str) -> Result<AccessClaims, TokenError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed);
    };

    let json = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&json)?)
}

pub fn token_expiry_millis(token: &str) -> Result<i64, TokenError> {
    decode_claims(token)?
        .expires_at_millis()
        .ok_or(TokenError::MissingExpiry)
}

/// Fails closed: an undecodable token or one without `exp` is expired.
pub fn is_token_expired_at(token: &str, now_millis: i64) -> bool {
    match token_expiry_millis(token) {
        Ok(expires_at) => expires_at < now_millis,
        Err(_) => true,
    }
}

pub fn is_token_expired(token: &str) -> bool {
    is_token_expired_at(token, Utc::now().timestamp_millis())
}
