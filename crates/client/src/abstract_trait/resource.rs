use crate::domain::requests::FindAllQuery;
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::ApiError;
use std::sync::Arc;

pub type DynResourceClient = Arc<dyn ResourceClientTrait + Send + Sync>;
pub type DynTrashClient = Arc<dyn TrashClientTrait + Send + Sync>;

#[async_trait]
pub trait ResourceClientTrait {
    async fn find_all(&self, query: &FindAllQuery) -> Result<Value, ApiError>;
    async fn find_by_id(&self, id: &str) -> Result<Value, ApiError>;
    async fn create(&self, body: &Value) -> Result<Value, ApiError>;
    async fn update(&self, id: &str, body: &Value) -> Result<Value, ApiError>;
    /// Soft delete; the record moves to the trash.
    async fn delete(&self, id: &str) -> Result<Value, ApiError>;
}

#[async_trait]
pub trait TrashClientTrait {
    async fn find_all(&self, query: &FindAllQuery) -> Result<Value, ApiError>;
    async fn restore(&self, id: &str) -> Result<Value, ApiError>;
    async fn delete_permanent(&self, id: &str) -> Result<Value, ApiError>;
}
