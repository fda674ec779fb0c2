//! # Transport Port
//!
//! The gateway drives outbound HTTP through this port so the authentication
//! and error-mapping logic stays independent of the concrete client. The
//! production adapter is [`crate::ReqwestTransport`]; tests substitute an
//! in-memory implementation.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use shared_types::GatewayError;
use thiserror::Error;

/// Standard request verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    /// Wire name of the verb.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully specified outbound request, credential already attached.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    /// Request verb.
    pub verb: Verb,
    /// Resource path relative to the API base, e.g. `/users/12`.
    pub path: String,
    /// Query-string pairs.
    pub query: Vec<(String, String)>,
    /// Bearer credential, when a session is established.
    pub bearer: Option<String>,
    /// Request body.
    pub body: RequestBody,
}

/// Body of an outbound request.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// No body.
    Empty,
    /// JSON-encoded body.
    Json(serde_json::Value),
    /// Multipart form body (attachment endpoints).
    Multipart(Vec<FormPart>),
}

/// One part of a multipart form.
#[derive(Debug, Clone)]
pub struct FormPart {
    /// Form field name.
    pub name: String,
    /// Field value.
    pub value: FormValue,
}

/// Value carried by a [`FormPart`].
#[derive(Debug, Clone)]
pub enum FormValue {
    /// Plain text field.
    Text(String),
    /// Binary attachment.
    File {
        /// Original file name.
        file_name: String,
        /// MIME type.
        content_type: String,
        /// Raw content.
        bytes: Vec<u8>,
    },
}

impl FormPart {
    /// Text field.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FormValue::Text(value.into()),
        }
    }

    /// Binary attachment field.
    #[must_use]
    pub fn file(
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            value: FormValue::File {
                file_name: file_name.into(),
                content_type: content_type.into(),
                bytes,
            },
        }
    }
}

/// Build text parts from field pairs, omitting empty values rather than
/// sending them as empty strings.
#[must_use]
pub fn text_parts(fields: &[(&str, &str)]) -> Vec<FormPart> {
    fields
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| FormPart::text(*name, *value))
        .collect()
}

/// Raw response handed back by a transport adapter.
#[derive(Debug, Clone)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl ResponseSpec {
    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, GatewayError> {
        serde_json::from_slice(&self.body).map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

/// Transport-level failures, prior to any status interpretation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The fixed timeout ceiling elapsed before a response arrived.
    #[error("Request timed out")]
    Timeout,

    /// Connection-level failure.
    #[error("Connection failed: {0}")]
    Connection(String),
}

/// Port for executing outbound requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute one request to completion or transport failure. Cancellation
    /// is not supported; callers may ignore a stale result but cannot abort.
    async fn execute(&self, request: RequestSpec) -> Result<ResponseSpec, TransportError>;
}
