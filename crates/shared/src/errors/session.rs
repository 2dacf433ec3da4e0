use thiserror::Error;

/// Why no usable session could be read.
///
/// Callers that only care whether a user is logged in collapse both variants
/// to "go to /login"; they stay separate so logs can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No session cookie present")]
    Missing,

    #[error("Session cookie is corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to seal session: {0}")]
    Seal(String),
}
