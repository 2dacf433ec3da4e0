mod auth;
mod http;
mod refresh;
mod resource;

pub use self::auth::AuthClientService;
pub use self::http::ApiClient;
pub use self::refresh::{HttpRefreshBackend, RefreshCoordinator, RefreshOutcome};
pub use self::resource::{Backend, Resource, ResourceClientService, TrashClientService};

use crate::{abstract_trait::DynRefreshBackend, config::ClientConfig};
use anyhow::{Context, Result};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use shared::abstract_trait::DynSessionStore;
use std::sync::Arc;

/// One client per backend, all sharing a single refresh coordinator so a
/// stale token triggers one refresh no matter which backend noticed.
#[derive(Clone)]
pub struct HttpClients {
    pub auth: Arc<ApiClient>,
    pub api: Arc<ApiClient>,
    pub contact: Arc<ApiClient>,
    pub trash: Arc<ApiClient>,
    pub refresher: Arc<RefreshCoordinator>,
}

impl HttpClients {
    pub fn init(config: &ClientConfig, session: DynSessionStore) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        let backend =
            Arc::new(HttpRefreshBackend::new(http.clone(), config.refresh_url())) as DynRefreshBackend;
        let refresher = Arc::new(RefreshCoordinator::new(session.clone(), backend));

        let client = |name: &'static str, base_url: &str| {
            Arc::new(ApiClient::new(
                name,
                base_url,
                http.clone(),
                session.clone(),
                refresher.clone(),
            ))
        };

        Ok(Self {
            auth: client("auth", &config.auth_url),
            api: client("api", &config.api_url),
            contact: client("contact", &config.contact_url),
            trash: client("trash", &config.trash_url),
            refresher: refresher.clone(),
        })
    }

    pub fn for_backend(&self, backend: Backend) -> Arc<ApiClient> {
        match backend {
            Backend::Api => self.api.clone(),
            Backend::Contact => self.contact.clone(),
        }
    }
}
