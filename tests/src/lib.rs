//! # Fleetdesk Test Suite
//!
//! Unified test crate exercising the assembled data layer across crate
//! boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── support/          # Shared doubles and fixtures
//! │   ├── ScriptedTransport (queued responses, recorded requests)
//! │   └── StallingUsers (resource whose fetch-all blocks until released)
//! │
//! └── integration/      # Cross-crate flows
//!     ├── store_flow.rs        # cache lifecycle, fetch coalescing, fan-out
//!     ├── gateway_auth.rs      # bearer propagation, 401 recovery
//!     ├── session_flow.rs      # login/logout through the container
//!     └── maintenance_flow.rs  # pagination, schedule conversion, uploads
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p fleetdesk-tests
//!
//! # By flow
//! cargo test -p fleetdesk-tests integration::store_flow
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
pub mod support;
