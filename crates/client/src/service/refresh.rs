use crate::{
    abstract_trait::{DynRefreshBackend, RefreshBackendTrait},
    domain::response::{TokenResponse, from_envelope},
};
use async_trait::async_trait;
use serde_json::Value;
use shared::{
    abstract_trait::DynSessionStore,
    errors::{ApiError, RefreshError},
    utils::{decode_claims, is_token_expired},
};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;
use tracing::{debug, error, info, warn};

pub type RefreshOutcome = Result<String, RefreshError>;

type Subscribers = Vec<oneshot::Sender<RefreshOutcome>>;

/// POSTs the refresh token to the auth service. Uses a bare client so the
/// call never passes through the interceptors it serves.
#[derive(Debug, Clone)]
pub struct HttpRefreshBackend {
    http: reqwest::Client,
    url: String,
}

impl HttpRefreshBackend {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl RefreshBackendTrait for HttpRefreshBackend {
    async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse, ApiError> {
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(refresh_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response.json().await?;
        from_envelope(body)
    }
}

/// Single-flight access-token refresh.
///
/// The first caller performs the network refresh; callers arriving while it
/// is in flight queue up and receive the same outcome, in the order they
/// subscribed. Any failure clears the session.
pub struct RefreshCoordinator {
    session: DynSessionStore,
    backend: DynRefreshBackend,
    in_flight: Mutex<Option<Subscribers>>,
}

impl RefreshCoordinator {
    pub fn new(session: DynSessionStore, backend: DynRefreshBackend) -> Self {
        Self {
            session,
            backend,
            in_flight: Mutex::new(None),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<Subscribers>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_refreshing(&self) -> bool {
        self.slot().is_some()
    }

    pub async fn refresh_access_token(&self) -> RefreshOutcome {
        self.refresh(None).await
    }

    /// Refreshes on behalf of a caller holding `stale`. If the session already
    /// carries a different unexpired token, another refresh has landed since
    /// the caller read it and that token is returned without a network call.
    pub async fn refresh_stale_token(&self, stale: &str) -> RefreshOutcome {
        self.refresh(Some(stale)).await
    }

    async fn refresh(&self, stale: Option<&str>) -> RefreshOutcome {
        let waiter = {
            let mut slot = self.slot();
            match slot.as_mut() {
                Some(subscribers) => {
                    let (tx, rx) = oneshot::channel();
                    subscribers.push(tx);
                    Some(rx)
                }
                None => {
                    *slot = Some(Vec::new());
                    None
                }
            }
        };

        if let Some(rx) = waiter {
            debug!("Refresh already in flight, waiting for its result");
            return rx.await.unwrap_or(Err(RefreshError::Abandoned));
        }

        let flight = InFlight {
            coordinator: self,
            settled: false,
        };

        let outcome = self.perform_refresh(stale).await;
        flight.settle(&outcome);
        outcome
    }

    async fn perform_refresh(&self, stale: Option<&str>) -> RefreshOutcome {
        let mut session = match self.session.get_user_details() {
            Ok(session) => session,
            Err(e) => {
                warn!("Cannot refresh without a session: {e}");
                self.session.remove_user_details();
                return Err(RefreshError::NoSession(e));
            }
        };

        if let (Some(stale), Some(current)) = (stale, session.access_token()) {
            if current != stale && !is_token_expired(current) {
                debug!("Session already holds a newer access token for uid {}", session.uid);
                return Ok(current.to_string());
            }
        }

        let Some(refresh_token) = session.refresh_token().map(str::to_owned) else {
            warn!("Session for uid {} has no refresh token", session.uid);
            self.session.remove_user_details();
            return Err(RefreshError::MissingRefreshToken);
        };

        info!("Refreshing access token for uid {}", session.uid);

        let tokens = match self.backend.refresh(&refresh_token).await {
            Ok(tokens) => tokens,
            Err(e) => {
                error!("Token refresh failed, logging out: {e}");
                self.session.remove_user_details();
                return Err(RefreshError::Rejected(e.to_string()));
            }
        };

        session.token_data = match decode_claims(&tokens.access_token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                warn!("Refreshed access token has an unreadable payload: {e}");
                None
            }
        };
        session.access_token = tokens.access_token;
        if let Some(rotated) = tokens.refresh_token.filter(|t| !t.is_empty()) {
            session.refresh_token = rotated;
        }

        if let Err(e) = self.session.set_user_details(&session) {
            error!("Failed to store refreshed session, logging out: {e}");
            self.session.remove_user_details();
            return Err(RefreshError::Store(e.to_string()));
        }

        info!("Access token refreshed for uid {}", session.uid);
        Ok(session.access_token)
    }
}

/// Clears the in-flight flag however the leading refresh ends. If the leader
/// is dropped before settling, subscribers get `Abandoned` instead of hanging.
struct InFlight<'a> {
    coordinator: &'a RefreshCoordinator,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, outcome: &RefreshOutcome) {
        self.settled = true;
        self.release(outcome);
    }

    fn release(&self, outcome: &RefreshOutcome) {
        let subscribers = self.coordinator.slot().take().unwrap_or_default();
        if !subscribers.is_empty() {
            debug!("Releasing {} queued request(s)", subscribers.len());
        }
        for subscriber in subscribers {
            let _ = subscriber.send(outcome.clone());
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("Refresh abandoned before completion");
            self.release(&Err(RefreshError::Abandoned));
        }
    }
}
