//! # Fleetdesk Store - Entity Cache with Subscriber Fan-out
//!
//! One [`EntityStore`] instance is the single source of truth for one entity
//! type's list view. It serves reads from an in-memory collection, mutates
//! the collection only after the remote call succeeds, and fans each new
//! snapshot out to registered observers synchronously, in registration order.
//!
//! ```text
//! ┌──────────────┐  get_all/create/…  ┌──────────────┐  fetch    ┌──────────┐
//! │  Collaborator│ ─────────────────→ │ EntityStore  │ ────────→ │ Resource │
//! │  (UI layer)  │                    │  collection  │           │ (REST)   │
//! └──────▲───────┘                    │  + loading   │           └──────────┘
//!        │                            └──────┬───────┘
//!        │        snapshot fan-out           │ mutation applied
//!        └────────────────────────────────── ▼
//!                                     ┌──────────────┐
//!                                     │  Subscriber  │  registration order,
//!                                     │   Registry   │  copy-on-notify
//!                                     └──────────────┘
//! ```
//!
//! ## Ownership
//!
//! Stores are explicitly constructed and explicitly owned: the composition
//! root wires one instance per entity type and injects it into consumers.
//! There is no module-level singleton and no hidden lifecycle.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod cache;
pub mod registry;
pub mod resource;
pub mod store;

// Re-export main types
pub use cache::CacheState;
pub use registry::{Observer, SubscriberRegistry, SubscriptionHandle};
pub use resource::EntityResource;
pub use store::EntityStore;
