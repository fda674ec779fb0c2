//! # Fleetdesk Runtime - Composition Root
//!
//! Wires the data layer together: configuration, telemetry, the HTTP
//! gateway, the session gate, and one entity store per entity type backed by
//! its REST resource adapter.
//!
//! ```text
//! ┌───────────────────────────── Container ─────────────────────────────┐
//! │                                                                     │
//! │  MemoryCredentialStore ──┬──→ Gateway ──→ ReqwestTransport ──→ API  │
//! │                          └──→ SessionGate                           │
//! │                                                                     │
//! │  EntityStore<UsersResource>        /users                           │
//! │  EntityStore<ClientsResource>      /clients                         │
//! │  EntityStore<ProductsResource>     /products                        │
//! │  EntityStore<MaintenanceResource>  /maintenance                     │
//! │                                                                     │
//! │  AuthApi                           /users/login                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stores are explicitly constructed here and injected into consumers;
//! nothing in the workspace reaches for an ambient singleton.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod auth;
pub mod config;
pub mod container;
pub mod resources;
pub mod telemetry;

pub use auth::AuthApi;
pub use config::{ApiConfig, ConfigError, RuntimeConfig};
pub use container::{BootstrapError, Container};
pub use resources::{
    ClientsResource, CreateClient, CreateMaintenanceRequest, CreateProduct, CreateUser,
    MaintenanceResource, ProductsResource, UpdateClient, UpdateMaintenanceRequest, UpdateProduct,
    UpdateUser, UsersResource,
};
