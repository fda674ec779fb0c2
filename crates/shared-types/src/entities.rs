//! # Core Domain Entities
//!
//! Defines the domain records managed by the entity stores.
//!
//! ## Clusters
//!
//! - **People**: `User`, `UserProfile`, `Session`
//! - **Business**: `Client`, `Product`
//! - **Scheduling**: `MaintenanceRequest`, `Schedule`
//!
//! Every entity carries a canonical `id` string, stable for the record's
//! lifetime. Relationships are server-owned; entities hold denormalized
//! references by identifier string only.

use crate::status::{RequestStatus, Role, ServiceKind};
use crate::wire::FromWire;
use serde::{Deserialize, Serialize};

/// A domain record with a stable, unique identifier.
pub trait Entity: Clone + Send + Sync {
    /// Canonical identifier, unique within the entity's collection.
    fn id(&self) -> &str;
}

// =============================================================================
// CLUSTER A: PEOPLE
// =============================================================================

/// An application user (operator of the scheduling system).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Canonical identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, unique server-side.
    pub email: String,
    /// Authorization role.
    pub role: Role,
}

/// Domain fields of a [`User`] as they appear on the wire, identifier excluded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Entity for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl FromWire for User {
    type Fields = UserFields;

    fn assemble(id: String, fields: UserFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            role: fields.role,
        }
    }
}

/// The profile of the currently signed-in user, persisted alongside the
/// bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Canonical identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Authorization role.
    pub role: Role,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// An established session: opaque bearer token plus the signed-in profile.
///
/// Created on successful login; persisted until explicit logout or until the
/// gateway observes an authentication-rejected response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque credential string attached to outbound requests.
    pub token: String,
    /// Profile of the signed-in user.
    pub user: UserProfile,
}

// =============================================================================
// CLUSTER B: BUSINESS
// =============================================================================

/// A client whose vehicles receive maintenance or installation services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Canonical identifier.
    pub id: String,
    /// Client name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Optional street address.
    pub address: Option<String>,
}

/// Domain fields of a [`Client`] on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
}

impl Entity for Client {
    fn id(&self) -> &str {
        &self.id
    }
}

impl FromWire for Client {
    type Fields = ClientFields;

    fn assemble(id: String, fields: ClientFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            address: fields.address,
        }
    }
}

/// A product or part installed during a service visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Canonical identifier.
    pub id: String,
    /// Product name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Unit price in the server's currency.
    pub price: f64,
    /// URL of the uploaded product image, if any.
    pub image_url: Option<String>,
}

/// Domain fields of a [`Product`] on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Entity for Product {
    fn id(&self) -> &str {
        &self.id
    }
}

impl FromWire for Product {
    type Fields = ProductFields;

    fn assemble(id: String, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        }
    }
}

// =============================================================================
// CLUSTER C: SCHEDULING
// =============================================================================

/// An intake request for maintenance or installation, prior to conversion
/// into concrete schedules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    /// Canonical identifier.
    pub id: String,
    /// Identifier of the requesting client.
    pub client_id: String,
    /// Kind of service requested.
    pub service: ServiceKind,
    /// Current lifecycle status.
    pub status: RequestStatus,
    /// Free-form description of the request.
    pub description: Option<String>,
    /// Requested date, ISO-8601 string as sent by the server.
    pub requested_date: Option<String>,
}

/// Domain fields of a [`MaintenanceRequest`] on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequestFields {
    pub client_id: String,
    pub service: ServiceKind,
    pub status: RequestStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requested_date: Option<String>,
}

impl Entity for MaintenanceRequest {
    fn id(&self) -> &str {
        &self.id
    }
}

impl FromWire for MaintenanceRequest {
    type Fields = MaintenanceRequestFields;

    fn assemble(id: String, fields: MaintenanceRequestFields) -> Self {
        Self {
            id,
            client_id: fields.client_id,
            service: fields.service,
            status: fields.status,
            description: fields.description,
            requested_date: fields.requested_date,
        }
    }
}

/// A concrete service appointment produced from an approved maintenance
/// request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Canonical identifier.
    pub id: String,
    /// Identifier of the originating maintenance request.
    pub maintenance_id: String,
    /// Appointment date, ISO-8601 string as sent by the server.
    pub scheduled_for: String,
    /// Assigned technician, if one has been allocated.
    pub technician_id: Option<String>,
}

/// Domain fields of a [`Schedule`] on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleFields {
    pub maintenance_id: String,
    pub scheduled_for: String,
    #[serde(default)]
    pub technician_id: Option<String>,
}

impl Entity for Schedule {
    fn id(&self) -> &str {
        &self.id
    }
}

impl FromWire for Schedule {
    type Fields = ScheduleFields;

    fn assemble(id: String, fields: ScheduleFields) -> Self {
        Self {
            id,
            maintenance_id: fields.maintenance_id,
            scheduled_for: fields.scheduled_for,
            technician_id: fields.technician_id,
        }
    }
}
