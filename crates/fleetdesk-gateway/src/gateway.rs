//! # Gateway
//!
//! Outbound interception (bearer injection) and inbound interception
//! (unauthorized-status handling) around a transport port.
//!
//! The gateway performs exactly one cross-cutting recovery action: clearing
//! session state when the server rejects authentication. Every other failure
//! maps onto the error taxonomy and propagates unchanged.

use crate::credentials::CredentialStore;
use crate::transport::{FormPart, HttpTransport, RequestBody, RequestSpec, ResponseSpec, Verb};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use shared_types::GatewayError;
use std::sync::Arc;
use tracing::{debug, warn, Instrument};
use uuid::Uuid;

/// HTTP gateway: the single path for all outbound requests.
pub struct Gateway {
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<dyn CredentialStore>,
}

impl Gateway {
    /// Wire a gateway over a transport and a credential store.
    pub fn new(transport: Arc<dyn HttpTransport>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        self.dispatch(Verb::Get, path, Vec::new(), RequestBody::Empty)
            .await
    }

    /// GET a JSON resource with query parameters.
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, GatewayError> {
        self.dispatch(Verb::Get, path, query, RequestBody::Empty)
            .await
    }

    /// POST a JSON body, decoding a JSON response.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, GatewayError> {
        self.dispatch(Verb::Post, path, Vec::new(), Self::json_body(body)?)
            .await
    }

    /// PUT a JSON body (full update), decoding a JSON response.
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, GatewayError> {
        self.dispatch(Verb::Put, path, Vec::new(), Self::json_body(body)?)
            .await
    }

    /// PATCH a JSON body (partial update), decoding a JSON response.
    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, GatewayError> {
        self.dispatch(Verb::Patch, path, Vec::new(), Self::json_body(body)?)
            .await
    }

    /// DELETE a resource, ignoring any response body.
    pub async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        self.send(Verb::Delete, path, Vec::new(), RequestBody::Empty)
            .await?;
        Ok(())
    }

    /// POST a multipart form (attachment endpoints), decoding a JSON
    /// response. Empty-valued fields must already be omitted from `parts`;
    /// see [`crate::text_parts`].
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        parts: Vec<FormPart>,
    ) -> Result<T, GatewayError> {
        self.dispatch(Verb::Post, path, Vec::new(), RequestBody::Multipart(parts))
            .await
    }

    fn json_body(body: &impl Serialize) -> Result<RequestBody, GatewayError> {
        serde_json::to_value(body)
            .map(RequestBody::Json)
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        query: Vec<(String, String)>,
        body: RequestBody,
    ) -> Result<T, GatewayError> {
        self.send(verb, path, query, body).await?.json()
    }

    /// Execute one request and interpret the response status.
    async fn send(
        &self,
        verb: Verb,
        path: &str,
        query: Vec<(String, String)>,
        body: RequestBody,
    ) -> Result<ResponseSpec, GatewayError> {
        let correlation = Uuid::new_v4();
        let span = tracing::debug_span!(
            "gateway_request",
            %correlation,
            verb = verb.as_str(),
            path
        );

        let request = RequestSpec {
            verb,
            path: path.to_string(),
            query,
            bearer: self.credentials.token(),
            body,
        };

        async {
            let response = self
                .transport
                .execute(request)
                .await
                .map_err(GatewayError::from)?;

            match response.status {
                200..=299 => {
                    debug!(status = response.status, "Request completed");
                    Ok(response)
                }
                401 => {
                    // The sole cross-cutting recovery: drop the session,
                    // then re-raise. Redirection is a route guard's job.
                    warn!("Unauthorized response, clearing session state");
                    self.credentials.clear();
                    Err(GatewayError::AuthenticationRejected)
                }
                404 => Err(GatewayError::NotFound(path.to_string())),
                400 | 422 => Err(GatewayError::ValidationRejected {
                    message: server_message(&response.body),
                }),
                status => Err(GatewayError::NetworkFailure(format!(
                    "unexpected status {status}"
                ))),
            }
        }
        .instrument(span)
        .await
    }
}

impl From<crate::transport::TransportError> for GatewayError {
    fn from(err: crate::transport::TransportError) -> Self {
        match err {
            crate::transport::TransportError::Timeout => Self::Timeout,
            crate::transport::TransportError::Connection(message) => {
                Self::NetworkFailure(message)
            }
        }
    }
}

/// Pull a human-readable reason out of an error body, falling back to the
/// raw text when the body is not the conventional `{ "message": ... }`.
fn server_message(body: &[u8]) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    serde_json::from_slice::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| String::from_utf8_lossy(body).into_owned())
}
