use crate::errors::SessionError;
use thiserror::Error;

/// Outcome of a failed refresh. Cloned to every request that queued behind
/// the in-flight refresh, so it carries messages rather than source errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefreshError {
    #[error("No session to refresh: {0}")]
    NoSession(#[from] SessionError),

    #[error("Session has no refresh token")]
    MissingRefreshToken,

    #[error("Refresh rejected by auth service: {0}")]
    Rejected(String),

    #[error("Refreshed session could not be stored: {0}")]
    Store(String),

    #[error("Refresh was abandoned before it completed")]
    Abandoned,
}
