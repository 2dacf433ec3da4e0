mod proxy;
mod session;

use crate::{middleware::role_gate_middleware, state::AppState};
use anyhow::Result;
use axum::{
    Extension, Router,
    body::Body,
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    middleware,
    response::{IntoResponse, Response},
    routing::{any, get, post},
};
use prometheus_client::encoding::text::encode;
use shared::{model::UNAUTHORIZED_PATH, utils::shutdown_signal};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use self::proxy::{UpstreamProxy, proxy_handler};
pub use self::session::{logout_handler, unauthorized_handler};

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> Response {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        Body::from(buffer),
    )
        .into_response()
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: Arc<AppState>) -> Router {
        let gated_routes = Router::new()
            .route("/", any(proxy_handler))
            .route("/dashboard", any(proxy_handler))
            .route("/dashboard/{*path}", any(proxy_handler))
            .route_layer(middleware::from_fn(role_gate_middleware))
            .layer(Extension(app_state.gate.clone()));

        let public_routes = Router::new()
            .route(UNAUTHORIZED_PATH, get(unauthorized_handler))
            .route("/logout", post(logout_handler))
            .route("/metrics", get(metrics_handler))
            .fallback(proxy_handler);

        gated_routes
            .merge(public_routes)
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(Arc::new(app_state));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("Gateway listening on http://{}", listener.local_addr()?);
        info!("Metrics available at http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
