use crate::errors::{RefreshError, SessionError};
use reqwest::header::InvalidHeaderValue;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Token refresh failed: {0}")]
    Refresh(#[from] RefreshError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
