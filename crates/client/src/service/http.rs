use crate::{config::join_url, service::refresh::RefreshCoordinator};
use reqwest::{
    Method, Request, RequestBuilder, Response, StatusCode,
    header::{AUTHORIZATION, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use shared::{abstract_trait::DynSessionStore, errors::ApiError, utils::is_token_expired};
use std::sync::Arc;
use tracing::{debug, warn};

/// HTTP client bound to one backend.
///
/// Every request passes two interceptors: before sending, the session's
/// access token is attached (refreshed first if stale); after a `401`, the
/// token is refreshed once and the request replayed once.
pub struct ApiClient {
    name: &'static str,
    base_url: String,
    http: reqwest::Client,
    session: DynSessionStore,
    refresher: Arc<RefreshCoordinator>,
}

impl ApiClient {
    pub fn new(
        name: &'static str,
        base_url: impl Into<String>,
        http: reqwest::Client,
        session: DynSessionStore,
        refresher: Arc<RefreshCoordinator>,
    ) -> Self {
        Self {
            name,
            base_url: base_url.into(),
            http,
            session,
            refresher,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let mut request = builder.build()?;
        let replay = request.try_clone();

        let sent_token = self.authorize(&mut request).await?;
        debug!(client = self.name, "{} {}", request.method(), request.url());

        let response = self.http.execute(request).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        let (Some(mut replay), Some(sent_token)) = (replay, sent_token) else {
            return Err(ApiError::Unauthorized);
        };

        warn!(
            client = self.name,
            "401 from {}, refreshing token and retrying once",
            replay.url()
        );

        let token = self.refresher.refresh_stale_token(&sent_token).await?;
        set_bearer(&mut replay, &token)?;

        let response = self.http.execute(replay).await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            warn!(client = self.name, "Retried request still unauthorized");
            return Err(ApiError::Unauthorized);
        }

        Ok(response)
    }

    /// Attaches the bearer token, refreshing first when it is stale. Returns
    /// the token attached; requests without a session go out anonymously.
    async fn authorize(&self, request: &mut Request) -> Result<Option<String>, ApiError> {
        let Some(session) = self.session.user_details() else {
            return Ok(None);
        };
        let Some(current) = session.access_token() else {
            return Ok(None);
        };

        let token = if is_token_expired(current) {
            debug!(client = self.name, "Access token stale, refreshing before send");
            self.refresher.refresh_stale_token(current).await?
        } else {
            current.to_string()
        };

        set_bearer(request, &token)?;
        Ok(Some(token))
    }

    pub async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(builder).await?;
        read_json(response).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send_json(self.request(Method::GET, path)).await
    }

    pub async fn get_json_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.request(Method::GET, path).query(query))
            .await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.request(Method::POST, path).json(body))
            .await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.request(Method::PUT, path).json(body))
            .await
    }

    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_json(self.request(Method::PATCH, path).json(body))
            .await
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send_json(self.request(Method::DELETE, path)).await
    }
}

fn set_bearer(request: &mut Request, token: &str) -> Result<(), ApiError> {
    let value = HeaderValue::from_str(&format!("Bearer {token}"))?;
    request.headers_mut().insert(AUTHORIZATION, value);
    Ok(())
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json().await?)
}
