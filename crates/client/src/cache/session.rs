use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use shared::{
    abstract_trait::SessionStoreTrait,
    config::{SESSION_COOKIE_NAME, SessionCookie},
    errors::SessionError,
    model::Session,
};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, warn};

/// Session store backed by the encrypted `userDetails` cookie.
#[derive(Debug, Default)]
pub struct CookieSessionStore {
    cookie: SessionCookie,
    jar: Mutex<CookieJar>,
}

impl CookieSessionStore {
    pub fn new(cookie: SessionCookie) -> Self {
        Self {
            cookie,
            jar: Mutex::new(CookieJar::new()),
        }
    }

    fn jar(&self) -> MutexGuard<'_, CookieJar> {
        self.jar.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The current cookie, ready to be sent as `Set-Cookie`.
    pub fn session_cookie(&self) -> Option<Cookie<'static>> {
        self.jar().get(SESSION_COOKIE_NAME).cloned()
    }

    /// Adopts a sealed cookie value received from elsewhere (a browser or a
    /// gateway response). The value is not validated until it is read.
    pub fn import_cookie(&self, value: &str) {
        let cookie = Cookie::build((SESSION_COOKIE_NAME, value.to_string()))
            .path("/")
            .secure(true)
            .same_site(SameSite::Strict)
            .build();

        let mut jar = self.jar();
        *jar = std::mem::take(&mut *jar).add(cookie);
        debug!("Session cookie imported");
    }
}

impl SessionStoreTrait for CookieSessionStore {
    fn set_user_details(&self, session: &Session) -> Result<(), SessionError> {
        let cookie = self.cookie.seal(session).map_err(|e| {
            error!("Failed to seal session: {e}");
            e
        })?;

        let mut jar = self.jar();
        *jar = std::mem::take(&mut *jar).add(cookie);
        debug!("Session stored for uid: {}", session.uid);
        Ok(())
    }

    fn get_user_details(&self) -> Result<Session, SessionError> {
        let jar = self.jar();

        match self.cookie.read(&jar) {
            Ok(session) => Ok(session),
            Err(SessionError::Missing) => {
                debug!("Session cookie not found");
                Err(SessionError::Missing)
            }
            Err(e) => {
                warn!("Failed to read session cookie: {e}");
                Err(e)
            }
        }
    }

    fn remove_user_details(&self) {
        let mut jar = self.jar();
        *jar = std::mem::take(&mut *jar).remove(self.cookie.removal());
        debug!("Session cookie removed");
    }
}
