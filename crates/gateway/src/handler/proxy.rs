use crate::{
    metrics::GateMetrics,
    middleware::{canonical_url, path_and_query},
    state::AppState,
};
use axum::{
    body::{Body, to_bytes},
    extract::{Request, State},
    http::header::{CONNECTION, HOST, TRANSFER_ENCODING},
    response::{IntoResponse, Redirect, Response},
};
use shared::errors::HttpError;
use std::sync::Arc;
use tracing::{debug, error, warn};

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Forwards requests that passed the gate to the dashboard frontend.
#[derive(Debug, Clone)]
pub struct UpstreamProxy {
    http: reqwest::Client,
    base_url: String,
    metrics: GateMetrics,
}

impl UpstreamProxy {
    pub fn new(base_url: &str, metrics: GateMetrics) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            metrics,
        })
    }

    pub async fn forward(&self, req: Request) -> Result<Response, HttpError> {
        let (parts, body) = req.into_parts();

        let canonical = canonical_url(&parts.uri)
            .map(|url| path_and_query(&url))
            .ok_or_else(|| {
                HttpError::BadRequest(format!("Invalid request target {}", parts.uri))
            })?;

        let raw = parts.uri.path_and_query().map_or("/", |pq| pq.as_str());
        if canonical != raw {
            // The resolved path has to pass routing and the gate again.
            warn!("Redirecting non-canonical target {raw} to {canonical}");
            return Ok(Redirect::temporary(&canonical).into_response());
        }

        let target = format!("{}{}", self.base_url, canonical);

        let body = to_bytes(body, MAX_BODY_BYTES)
            .await
            .map_err(|e| HttpError::BadRequest(format!("Unreadable request body: {e}")))?;

        let mut headers = parts.headers;
        headers.remove(HOST);
        headers.remove(CONNECTION);
        headers.remove(TRANSFER_ENCODING);

        debug!("Proxying {} {}", parts.method, target);

        let upstream = self
            .http
            .request(parts.method, &target)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!("Upstream request to {target} failed: {e}");
                self.metrics.upstream_errors.inc();
                HttpError::from(e)
            })?;

        let status = upstream.status();
        let mut headers = upstream.headers().clone();
        headers.remove(CONNECTION);
        headers.remove(TRANSFER_ENCODING);

        let bytes = upstream.bytes().await.map_err(|e| {
            self.metrics.upstream_errors.inc();
            HttpError::from(e)
        })?;

        let mut response = Response::new(Body::from(bytes));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

pub async fn proxy_handler(State(state): State<Arc<AppState>>, req: Request) -> Response {
    match state.proxy.forward(req).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}
