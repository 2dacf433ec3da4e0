use crate::domain::response::TokenResponse;
use async_trait::async_trait;
use shared::errors::ApiError;
use std::sync::Arc;

pub type DynRefreshBackend = Arc<dyn RefreshBackendTrait + Send + Sync>;

/// The auth-service endpoint that trades a refresh token for a new access
/// token.
#[async_trait]
pub trait RefreshBackendTrait {
    async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse, ApiError>;
}
