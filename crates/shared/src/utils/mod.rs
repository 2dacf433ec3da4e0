mod logs;
mod shutdown;
mod token;

pub use self::logs::init_logger;
pub use self::shutdown::shutdown_signal;
pub use self::token::{decode_claims, is_token_expired, is_token_expired_at, token_expiry_millis};

/// `"true"`/`"1"` in the named variable.
pub fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}
