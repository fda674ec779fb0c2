//! Client registry resource over `/clients`.

use async_trait::async_trait;
use fleetdesk_gateway::Gateway;
use fleetdesk_store::EntityResource;
use serde::Serialize;
use shared_types::{normalize_all, Client, ClientFields, GatewayError, WireRecord};
use std::sync::Arc;

/// Payload for registering a client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Partial payload for updating a client.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// REST adapter for the `/clients` collection.
pub struct ClientsResource {
    gateway: Arc<Gateway>,
}

impl ClientsResource {
    /// Adapter over the shared gateway.
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl EntityResource for ClientsResource {
    type Record = Client;
    type CreateInput = CreateClient;
    type UpdateInput = UpdateClient;

    async fn fetch_all(&self) -> Result<Vec<Client>, GatewayError> {
        let records: Vec<WireRecord<ClientFields>> = self.gateway.get("/clients").await?;
        normalize_all(records).map_err(Into::into)
    }

    async fn fetch_one(&self, id: &str) -> Result<Client, GatewayError> {
        let record: WireRecord<ClientFields> =
            self.gateway.get(&format!("/clients/{id}")).await?;
        record.normalize().map_err(Into::into)
    }

    async fn create(&self, input: CreateClient) -> Result<Client, GatewayError> {
        let record: WireRecord<ClientFields> = self.gateway.post("/clients", &input).await?;
        record.normalize().map_err(Into::into)
    }

    async fn update(&self, id: &str, input: UpdateClient) -> Result<Client, GatewayError> {
        let record: WireRecord<ClientFields> = self
            .gateway
            .patch(&format!("/clients/{id}"), &input)
            .await?;
        record.normalize().map_err(Into::into)
    }

    async fn remove(&self, id: &str) -> Result<(), GatewayError> {
        self.gateway.delete(&format!("/clients/{id}")).await
    }
}
