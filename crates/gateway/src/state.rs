use crate::{config::Config, handler::UpstreamProxy, middleware::RoleGate};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::config::{RouteTable, SessionCookie};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub gate: Arc<RoleGate>,
    pub session_cookie: SessionCookie,
    pub proxy: UpstreamProxy,
    pub registry: Arc<Mutex<Registry>>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let session_cookie = SessionCookie::new(&config.session_secret);
        let routes = RouteTable::default();
        info!(
            "Gating {} route prefix(es) in front of {}",
            routes.rules().len(),
            config.upstream_url
        );
        let gate = Arc::new(RoleGate::new(session_cookie.clone(), routes));

        let proxy = UpstreamProxy::new(&config.upstream_url, gate.metrics().clone())
            .context("Failed to build upstream client")?;

        let mut registry = Registry::default();
        gate.metrics().register(&mut registry);

        Ok(Self {
            gate,
            session_cookie,
            proxy,
            registry: Arc::new(Mutex::new(registry)),
        })
    }
}
