//! User management resource over `/users`.

use async_trait::async_trait;
use fleetdesk_gateway::Gateway;
use fleetdesk_store::EntityResource;
use serde::Serialize;
use shared_types::{normalize_all, GatewayError, Role, User, UserFields, WireRecord};
use std::sync::Arc;

/// Payload for creating a user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password: String,
}

/// Partial payload for updating a user; `None` fields are omitted from the
/// request body.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// REST adapter for the `/users` collection.
pub struct UsersResource {
    gateway: Arc<Gateway>,
}

impl UsersResource {
    /// Adapter over the shared gateway.
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl EntityResource for UsersResource {
    type Record = User;
    type CreateInput = CreateUser;
    type UpdateInput = UpdateUser;

    async fn fetch_all(&self) -> Result<Vec<User>, GatewayError> {
        let records: Vec<WireRecord<UserFields>> = self.gateway.get("/users").await?;
        normalize_all(records).map_err(Into::into)
    }

    async fn fetch_one(&self, id: &str) -> Result<User, GatewayError> {
        let record: WireRecord<UserFields> = self.gateway.get(&format!("/users/{id}")).await?;
        record.normalize().map_err(Into::into)
    }

    async fn create(&self, input: CreateUser) -> Result<User, GatewayError> {
        let record: WireRecord<UserFields> = self.gateway.post("/users", &input).await?;
        record.normalize().map_err(Into::into)
    }

    async fn update(&self, id: &str, input: UpdateUser) -> Result<User, GatewayError> {
        let record: WireRecord<UserFields> = self
            .gateway
            .patch(&format!("/users/{id}"), &input)
            .await?;
        record.normalize().map_err(Into::into)
    }

    async fn remove(&self, id: &str) -> Result<(), GatewayError> {
        self.gateway.delete(&format!("/users/{id}")).await
    }
}
