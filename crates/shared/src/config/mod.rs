mod cipher;
mod cookie;
mod routes;

pub use self::cipher::{DEFAULT_SESSION_SECRET, SessionCipher};
pub use self::cookie::{SESSION_COOKIE_NAME, SESSION_TTL_DAYS, SessionCookie};
pub use self::routes::{RouteRule, RouteTable};

/// Cookie secret from `SESSION_SECRET`, falling back to the built-in one.
pub fn session_secret_from_env() -> String {
    std::env::var("SESSION_SECRET")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SESSION_SECRET.to_string())
}
