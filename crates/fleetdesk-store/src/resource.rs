//! # Entity Resource Port
//!
//! The remote side of an entity store. Adapters translate these operations
//! into REST calls through the gateway and hand back records that are
//! already normalized (canonical identifiers only).

use async_trait::async_trait;
use shared_types::{Entity, GatewayError};

/// Remote CRUD operations for one entity type.
#[async_trait]
pub trait EntityResource: Send + Sync {
    /// Canonical domain record served by this resource.
    type Record: Entity + 'static;
    /// Payload accepted by `create`.
    type CreateInput: Send + 'static;
    /// Payload accepted by `update`.
    type UpdateInput: Send + 'static;

    /// Fetch the full collection.
    async fn fetch_all(&self) -> Result<Vec<Self::Record>, GatewayError>;

    /// Fetch a single record by identifier.
    async fn fetch_one(&self, id: &str) -> Result<Self::Record, GatewayError>;

    /// Create a record remotely.
    async fn create(&self, input: Self::CreateInput) -> Result<Self::Record, GatewayError>;

    /// Update a record remotely.
    async fn update(
        &self,
        id: &str,
        input: Self::UpdateInput,
    ) -> Result<Self::Record, GatewayError>;

    /// Delete a record remotely.
    async fn remove(&self, id: &str) -> Result<(), GatewayError>;
}
