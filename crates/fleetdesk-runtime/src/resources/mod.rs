//! # REST Resource Adapters
//!
//! One adapter per entity type, translating the store's resource port into
//! gateway calls and normalizing wire records at the boundary. Standard
//! verbs map to list/get/create/update/delete on the entity's path.

pub mod clients;
pub mod maintenance;
pub mod products;
pub mod users;

pub use clients::{ClientsResource, CreateClient, UpdateClient};
pub use maintenance::{CreateMaintenanceRequest, MaintenanceResource, UpdateMaintenanceRequest};
pub use products::{CreateProduct, ProductsResource, UpdateProduct};
pub use users::{CreateUser, UpdateUser, UsersResource};
