//! # Fleetdesk Session - Authentication and Role Gating
//!
//! Derives "is authenticated" and "is authorized for role set X" from the
//! credential store. Route-guarding collaborators consume the answers; the
//! gate itself never redirects.
//!
//! ## State machine
//!
//! ```text
//! Loading ──resolve()──→ Authenticated ──logout / auth failure──→ Anonymous
//!    │                        ▲                                      │
//!    └──resolve()──→ Anonymous└──────────────login─────────────────--┘
//! ```
//!
//! After the initial resolution a session never returns to `Loading`.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod gate;

pub use gate::{SessionGate, SessionState};
