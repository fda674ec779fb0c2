//! # Dependency Container
//!
//! Explicit construction of every shared component. Consumers receive the
//! pieces they need from here; nothing reaches for an ambient singleton.

use crate::auth::AuthApi;
use crate::config::{ConfigError, RuntimeConfig};
use crate::resources::{ClientsResource, MaintenanceResource, ProductsResource, UsersResource};
use fleetdesk_gateway::{
    CredentialStore, Gateway, HttpTransport, MemoryCredentialStore, ReqwestTransport,
};
use fleetdesk_session::SessionGate;
use fleetdesk_store::EntityStore;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Failure to assemble the container.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration rejected before any component was built.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP transport: {0}")]
    Transport(String),
}

/// All shared components of the data layer, wired once at startup.
pub struct Container {
    /// Shared credential storage (read by the gateway and the gate).
    pub credentials: Arc<dyn CredentialStore>,
    /// Authentication/authorization answers for route guards.
    pub gate: Arc<SessionGate>,
    /// Sign-in and sign-out.
    pub auth: AuthApi,
    /// User collection store.
    pub users: Arc<EntityStore<UsersResource>>,
    /// Client collection store.
    pub clients: Arc<EntityStore<ClientsResource>>,
    /// Product collection store.
    pub products: Arc<EntityStore<ProductsResource>>,
    /// Maintenance request collection store.
    pub maintenance: Arc<EntityStore<MaintenanceResource>>,
    /// Maintenance resource, kept alongside its store for the pagination
    /// and schedule-conversion calls that bypass the cache.
    pub maintenance_resource: Arc<MaintenanceResource>,
    /// Product resource, kept alongside its store for image uploads.
    pub products_resource: Arc<ProductsResource>,
}

impl Container {
    /// Assemble the production container from configuration.
    pub fn new(config: &RuntimeConfig) -> Result<Self, BootstrapError> {
        config.validate()?;
        let transport = ReqwestTransport::with_timeout(
            config.api.base_url.clone(),
            Duration::from_secs(config.api.timeout_secs),
        )
        .map_err(|e| BootstrapError::Transport(e.to_string()))?;

        info!(base_url = %config.api.base_url, "Data layer container assembled");
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Assemble the container over an arbitrary transport. The seam tests
    /// use to substitute a scripted transport for the real client.
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        let credentials: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
        let gateway = Arc::new(Gateway::new(transport, Arc::clone(&credentials)));
        let gate = Arc::new(SessionGate::new(Arc::clone(&credentials)));

        let maintenance_resource = Arc::new(MaintenanceResource::new(Arc::clone(&gateway)));
        let products_resource = Arc::new(ProductsResource::new(Arc::clone(&gateway)));

        Self {
            auth: AuthApi::new(Arc::clone(&gateway), Arc::clone(&gate)),
            users: Arc::new(EntityStore::new(Arc::new(UsersResource::new(Arc::clone(
                &gateway,
            ))))),
            clients: Arc::new(EntityStore::new(Arc::new(ClientsResource::new(
                Arc::clone(&gateway),
            )))),
            products: Arc::new(EntityStore::new(Arc::clone(&products_resource))),
            maintenance: Arc::new(EntityStore::new(Arc::clone(&maintenance_resource))),
            maintenance_resource,
            products_resource,
            credentials,
            gate,
        }
    }
}
