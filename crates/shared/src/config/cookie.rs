use crate::{config::SessionCipher, errors::SessionError, model::Session};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::{Duration, OffsetDateTime};

pub const SESSION_COOKIE_NAME: &str = "userDetails";
pub const SESSION_TTL_DAYS: i64 = 7;

/// Reads and writes the encrypted `userDetails` cookie.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    cipher: SessionCipher,
    ttl: Duration,
}

impl SessionCookie {
    pub fn new(secret: &str) -> Self {
        Self {
            cipher: SessionCipher::new(secret),
            ttl: Duration::days(SESSION_TTL_DAYS),
        }
    }

    pub fn seal(&self, session: &Session) -> Result<Cookie<'static>, SessionError> {
        let json = serde_json::to_vec(session).map_err(|e| SessionError::Seal(e.to_string()))?;
        let value = self.cipher.encrypt(&json)?;

        Ok(Cookie::build((SESSION_COOKIE_NAME, value))
            .path("/")
            .secure(true)
            .same_site(SameSite::Strict)
            .expires(OffsetDateTime::now_utc() + self.ttl)
            .build())
    }

    pub fn open(&self, value: &str) -> Result<Session, SessionError> {
        let json = self.cipher.decrypt(value)?;
        serde_json::from_slice(&json)
            .map_err(|e| SessionError::Corrupt(format!("invalid session json: {e}")))
    }

    pub fn read(&self, jar: &CookieJar) -> Result<Session, SessionError> {
        let cookie = jar.get(SESSION_COOKIE_NAME).ok_or(SessionError::Missing)?;
        self.open(cookie.value())
    }

    /// Cookie to hand to `CookieJar::remove`; path must match the one used
    /// by `seal` or the browser keeps the original.
    pub fn removal(&self) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE_NAME).path("/").build()
    }
}

impl Default for SessionCookie {
    fn default() -> Self {
        Self {
            cipher: SessionCipher::default(),
            ttl: Duration::days(SESSION_TTL_DAYS),
        }
    }
}
