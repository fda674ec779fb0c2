//! # Error Types
//!
//! Defines the error taxonomy used across the data-layer crates.
//!
//! Propagation policy: the gateway performs exactly one cross-cutting
//! recovery action (clearing session state on `AuthenticationRejected`) and
//! then re-raises unchanged. No other layer intercepts errors; stores apply
//! no retries and no rollbacks because mutations are never optimistic.

use thiserror::Error;

/// Errors surfaced by the HTTP gateway.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// Transport-level failure: connection refused, DNS, TLS, broken pipe.
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The request exceeded the gateway's fixed timeout ceiling.
    #[error("Request exceeded the gateway timeout ceiling")]
    Timeout,

    /// The server rejected the bearer credential (unauthorized status).
    /// Session state has already been cleared when this surfaces.
    #[error("Authentication rejected")]
    AuthenticationRejected,

    /// The server declined the payload.
    #[error("Validation rejected: {message}")]
    ValidationRejected {
        /// Server-provided reason.
        message: String,
    },

    /// The addressed resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The response body could not be decoded into the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Errors surfaced by identifier normalization at the wire boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// The record carries neither `id` nor `_id`.
    #[error("Record carries no identifier field")]
    MissingIdentifier,

    /// The identifier field is present but empty.
    #[error("Record identifier is empty")]
    EmptyIdentifier,
}

impl From<NormalizeError> for GatewayError {
    fn from(err: NormalizeError) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Errors surfaced by an entity store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The underlying remote call failed; re-raised unchanged.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// `update`/`remove` was called before any fetch-all populated the
    /// collection. The operation never reached the network.
    #[error("Collection not loaded: {operation} requires a prior fetch-all")]
    NotLoaded {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}
