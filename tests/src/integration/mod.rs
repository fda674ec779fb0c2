//! # Integration Flows
//!
//! Cross-crate tests over the assembled data layer.

pub mod gateway_auth;
pub mod maintenance_flow;
pub mod session_flow;
pub mod store_flow;
