use crate::{
    abstract_trait::{DynAuthClient, DynResourceClient, DynTrashClient},
    cache::CookieSessionStore,
    config::ClientConfig,
    guard::RoleGuard,
    service::{
        AuthClientService, HttpClients, Resource, ResourceClientService, TrashClientService,
    },
};
use anyhow::{Context, Result};
use shared::{
    abstract_trait::DynSessionStore,
    config::{RouteTable, SessionCookie},
};
use std::{collections::HashMap, sync::Arc};

/// Everything a dashboard front end needs, wired over one session store.
#[derive(Clone)]
pub struct DependenciesInject {
    pub session: DynSessionStore,
    pub clients: HttpClients,
    pub auth: DynAuthClient,
    pub trash: DynTrashClient,
    pub guard: RoleGuard,
    pub routes: RouteTable,
    resources: HashMap<Resource, DynResourceClient>,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth", &"DynAuthClient")
            .field("trash", &"DynTrashClient")
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let session = Arc::new(CookieSessionStore::new(SessionCookie::new(
            &config.session_secret,
        ))) as DynSessionStore;

        Self::with_session(config, session)
    }

    pub fn with_session(config: &ClientConfig, session: DynSessionStore) -> Result<Self> {
        let clients = HttpClients::init(config, session.clone())
            .context("Failed to initialize HTTP clients")?;

        let auth: DynAuthClient = Arc::new(AuthClientService::new(
            clients.auth.clone(),
            session.clone(),
        ));

        let trash: DynTrashClient = Arc::new(TrashClientService::new(clients.trash.clone()));

        let resources = Resource::ALL
            .into_iter()
            .map(|resource| {
                let client = clients.for_backend(resource.backend());
                let service: DynResourceClient =
                    Arc::new(ResourceClientService::new(client, resource));
                (resource, service)
            })
            .collect();

        Ok(Self {
            guard: RoleGuard::new(session.clone()),
            routes: RouteTable::default(),
            session,
            clients,
            auth,
            trash,
            resources,
        })
    }

    pub fn resource(&self, resource: Resource) -> Option<DynResourceClient> {
        self.resources.get(&resource).cloned()
    }
}
