//! # Reqwest Transport Adapter
//!
//! Production implementation of [`HttpTransport`] over `reqwest`, with the
//! fixed timeout ceiling applied at client construction.

use crate::transport::{
    FormValue, HttpTransport, RequestBody, RequestSpec, ResponseSpec, TransportError, Verb,
};
use crate::DEFAULT_TIMEOUT_SECS;
use async_trait::async_trait;
use std::time::Duration;

/// `reqwest`-backed transport.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a transport against the given API base with the default
    /// timeout ceiling.
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Build a transport with an explicit timeout ceiling.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Connection(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn build(&self, request: RequestSpec) -> reqwest::RequestBuilder {
        let method = match request.verb {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Patch => reqwest::Method::PATCH,
            Verb::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, self.url(&request.path));

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(parts) => {
                let mut form = reqwest::multipart::Form::new();
                for part in parts {
                    form = match part.value {
                        FormValue::Text(text) => form.text(part.name, text),
                        FormValue::File {
                            file_name,
                            content_type,
                            bytes,
                        } => {
                            // An unparsable MIME string degrades to the
                            // transport default rather than failing the upload.
                            let file = reqwest::multipart::Part::bytes(bytes.clone())
                                .file_name(file_name.clone())
                                .mime_str(&content_type)
                                .unwrap_or_else(|_| {
                                    reqwest::multipart::Part::bytes(bytes).file_name(file_name)
                                });
                            form.part(part.name, file)
                        }
                    };
                }
                builder.multipart(form)
            }
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: RequestSpec) -> Result<ResponseSpec, TransportError> {
        let response = self.build(request).send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Connection(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?
            .to_vec();

        Ok(ResponseSpec { status, body })
    }
}
