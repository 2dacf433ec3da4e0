use crate::{
    abstract_trait::{ResourceClientTrait, TrashClientTrait},
    domain::requests::FindAllQuery,
    service::http::ApiClient,
};
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::ApiError;
use std::sync::Arc;

/// Which backend serves a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Api,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Projects,
    Milestones,
    Blogs,
    Freelancers,
    Quotes,
    Consultations,
    ContactMessages,
}

impl Resource {
    pub const ALL: [Resource; 7] = [
        Resource::Projects,
        Resource::Milestones,
        Resource::Blogs,
        Resource::Freelancers,
        Resource::Quotes,
        Resource::Consultations,
        Resource::ContactMessages,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Resource::Projects => "/projects",
            Resource::Milestones => "/milestones",
            Resource::Blogs => "/blogs",
            Resource::Freelancers => "/freelancers",
            Resource::Quotes => "/quotes",
            Resource::Consultations => "/consultations",
            Resource::ContactMessages => "/contact-us",
        }
    }

    pub fn backend(&self) -> Backend {
        match self {
            Resource::ContactMessages => Backend::Contact,
            _ => Backend::Api,
        }
    }
}

pub struct ResourceClientService {
    client: Arc<ApiClient>,
    resource: Resource,
}

impl ResourceClientService {
    pub fn new(client: Arc<ApiClient>, resource: Resource) -> Self {
        Self { client, resource }
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}/{id}", self.resource.path())
    }
}

#[async_trait]
impl ResourceClientTrait for ResourceClientService {
    async fn find_all(&self, query: &FindAllQuery) -> Result<Value, ApiError> {
        self.client
            .get_json_with_query(self.resource.path(), query)
            .await
    }

    async fn find_by_id(&self, id: &str) -> Result<Value, ApiError> {
        self.client.get_json(&self.item_path(id)).await
    }

    async fn create(&self, body: &Value) -> Result<Value, ApiError> {
        self.client.post_json(self.resource.path(), body).await
    }

    async fn update(&self, id: &str, body: &Value) -> Result<Value, ApiError> {
        self.client.put_json(&self.item_path(id), body).await
    }

    async fn delete(&self, id: &str) -> Result<Value, ApiError> {
        self.client.delete_json(&self.item_path(id)).await
    }
}

pub struct TrashClientService {
    client: Arc<ApiClient>,
}

impl TrashClientService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TrashClientTrait for TrashClientService {
    async fn find_all(&self, query: &FindAllQuery) -> Result<Value, ApiError> {
        self.client.get_json_with_query("/trash", query).await
    }

    async fn restore(&self, id: &str) -> Result<Value, ApiError> {
        self.client
            .patch_json(&format!("/trash/{id}/restore"), &Value::Null)
            .await
    }

    async fn delete_permanent(&self, id: &str) -> Result<Value, ApiError> {
        self.client.delete_json(&format!("/trash/{id}")).await
    }
}
