//! # Fleetdesk Gateway - Outbound HTTP with Session Discipline
//!
//! Wraps every outbound request, attaches the stored bearer credential, and
//! detects authentication failure.
//!
//! ## Request flow
//!
//! ```text
//! ┌──────────────┐   request    ┌──────────────┐   execute    ┌───────────┐
//! │  Entity API  │ ───────────→ │   Gateway    │ ───────────→ │ Transport │
//! │  (caller)    │              │  + bearer    │              │ (reqwest) │
//! └──────────────┘              │  + timeout   │              └───────────┘
//!                               └──────┬───────┘
//!                                      │ 401 observed
//!                                      ▼
//!                               ┌──────────────┐
//!                               │ Credentials  │  token + profile cleared,
//!                               │   cleared    │  error re-raised unchanged
//!                               └──────────────┘
//! ```
//!
//! ## Rules
//!
//! - Absence of a stored credential is not an error; the request proceeds
//!   unauthenticated.
//! - On an unauthorized response the stored token and profile are cleared
//!   and the failure is re-raised to the caller. The gateway never redirects
//!   and never swallows; redirection belongs to a route-guarding collaborator.
//! - Every request is bounded by the transport's fixed timeout ceiling.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod credentials;
pub mod gateway;
pub mod reqwest_transport;
pub mod transport;

// Re-export main types
pub use credentials::{CredentialStore, MemoryCredentialStore};
pub use gateway::Gateway;
pub use reqwest_transport::ReqwestTransport;
pub use transport::{
    text_parts, FormPart, FormValue, HttpTransport, RequestBody, RequestSpec, ResponseSpec,
    TransportError, Verb,
};

/// Fixed request timeout ceiling in seconds, applied by transport adapters.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
