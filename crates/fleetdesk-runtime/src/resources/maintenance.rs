//! Maintenance request resource over `/maintenance`.
//!
//! The listing endpoint paginates; `fetch_all` asks for one oversized page
//! so the store's cache sees the full collection, while [`MaintenanceResource::page`]
//! exposes honest server-side pagination for views that want it.

use async_trait::async_trait;
use fleetdesk_gateway::Gateway;
use fleetdesk_store::EntityResource;
use serde::Serialize;
use shared_types::{
    normalize_all, GatewayError, MaintenanceRequest, MaintenanceRequestFields, Page, PageInfo,
    PageRequest, RequestStatus, Schedule, ScheduleFields, ServiceKind, WireRecord,
};
use std::sync::Arc;

/// Page size used to pull the whole collection in one request.
const FETCH_ALL_LIMIT: u32 = 1000;

/// Payload for filing a maintenance request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaintenanceRequest {
    pub client_id: String,
    pub service: ServiceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_date: Option<String>,
}

/// Partial payload for updating a maintenance request.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenanceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_date: Option<String>,
}

/// REST adapter for the `/maintenance` collection.
pub struct MaintenanceResource {
    gateway: Arc<Gateway>,
}

impl MaintenanceResource {
    /// Adapter over the shared gateway.
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Fetch one page of maintenance requests, pagination metadata included.
    pub async fn page(
        &self,
        request: PageRequest,
    ) -> Result<Page<MaintenanceRequest>, GatewayError> {
        let page: Page<WireRecord<MaintenanceRequestFields>> = self
            .gateway
            .get_with_query("/maintenance", request.to_query())
            .await?;

        let info: PageInfo = page.pagination;
        let data = normalize_all(page.data)?;
        Ok(Page {
            data,
            pagination: info,
        })
    }

    /// Convert an approved request into concrete schedules.
    ///
    /// The server owns the conversion; the response lists the schedules it
    /// produced.
    pub async fn convert_to_schedules(&self, id: &str) -> Result<Vec<Schedule>, GatewayError> {
        let records: Vec<WireRecord<ScheduleFields>> = self
            .gateway
            .post(
                &format!("/maintenance/{id}/create-schedules"),
                &serde_json::json!({}),
            )
            .await?;
        normalize_all(records).map_err(Into::into)
    }
}

#[async_trait]
impl EntityResource for MaintenanceResource {
    type Record = MaintenanceRequest;
    type CreateInput = CreateMaintenanceRequest;
    type UpdateInput = UpdateMaintenanceRequest;

    async fn fetch_all(&self) -> Result<Vec<MaintenanceRequest>, GatewayError> {
        let page = self.page(PageRequest::first(FETCH_ALL_LIMIT)).await?;
        Ok(page.data)
    }

    async fn fetch_one(&self, id: &str) -> Result<MaintenanceRequest, GatewayError> {
        let record: WireRecord<MaintenanceRequestFields> =
            self.gateway.get(&format!("/maintenance/{id}")).await?;
        record.normalize().map_err(Into::into)
    }

    async fn create(
        &self,
        input: CreateMaintenanceRequest,
    ) -> Result<MaintenanceRequest, GatewayError> {
        let record: WireRecord<MaintenanceRequestFields> =
            self.gateway.post("/maintenance", &input).await?;
        record.normalize().map_err(Into::into)
    }

    async fn update(
        &self,
        id: &str,
        input: UpdateMaintenanceRequest,
    ) -> Result<MaintenanceRequest, GatewayError> {
        let record: WireRecord<MaintenanceRequestFields> = self
            .gateway
            .patch(&format!("/maintenance/{id}"), &input)
            .await?;
        record.normalize().map_err(Into::into)
    }

    async fn remove(&self, id: &str) -> Result<(), GatewayError> {
        self.gateway.delete(&format!("/maintenance/{id}")).await
    }
}
