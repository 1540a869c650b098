//! HTTP client for the decompile service.
//!
//! This module provides:
//! - A client built once with the service credential
//! - A hard wall-clock budget per invocation
//! - Classification of every response into an [`InvocationOutcome`]

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

use super::types::{accepts_status, InvocationOutcome};
use crate::config::{Config, SecretString};
use crate::error::ClientError;
use crate::format::EncodedPayload;
use crate::traits::RemoteExecutor;

/// Decompile service client.
///
/// The underlying `reqwest::Client` is immutable after construction and
/// cheap to share; concurrent invocations do not interfere.
#[derive(Debug, Clone)]
pub struct DecompileClient {
    client: Client,
    endpoint: String,
}

impl DecompileClient {
    /// Create a client for `endpoint` that authenticates with `token`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the token is not a valid header value or
    /// the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, token: &SecretString) -> Result<Self, ClientError> {
        let mut auth = HeaderValue::from_str(&format!("Token {}", token.expose()))
            .map_err(|_| ClientError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Build {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Create a client from application configuration.
    ///
    /// # Errors
    ///
    /// See [`DecompileClient::new`].
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Self::new(config.decompile_url.clone(), &config.repl_token)
    }

    /// Get the endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send the request and read the body. Unbounded; callers add the timeout.
    async fn send(&self, payload: EncodedPayload, timeout_ms: u64) -> InvocationOutcome {
        let response = match self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, payload.content_type)
            .body(payload.body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Self::transport_failure(&e, timeout_ms),
        };

        let status = response.status();
        if !accepts_status(status) {
            return InvocationOutcome::ServerError {
                status_code: status.as_u16(),
            };
        }

        match response.text().await {
            Ok(body) => InvocationOutcome::Success { body },
            Err(e) => Self::transport_failure(&e, timeout_ms),
        }
    }

    fn transport_failure(error: &reqwest::Error, timeout_ms: u64) -> InvocationOutcome {
        if error.is_timeout() {
            InvocationOutcome::Timeout { timeout_ms }
        } else {
            InvocationOutcome::TransportError {
                message: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl RemoteExecutor for DecompileClient {
    async fn invoke(&self, payload: EncodedPayload, timeout_ms: u64) -> InvocationOutcome {
        let start = Instant::now();

        tracing::debug!(
            url = %self.endpoint,
            payload_bytes = payload.body.len(),
            timeout_ms,
            "Starting decompile request"
        );

        // Dropping the send future on expiry cancels the in-flight request.
        let outcome = tokio::time::timeout(
            Duration::from_millis(timeout_ms),
            self.send(payload, timeout_ms),
        )
        .await
        .unwrap_or(InvocationOutcome::Timeout { timeout_ms });

        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        match &outcome {
            InvocationOutcome::Success { body } => tracing::debug!(
                url = %self.endpoint,
                elapsed_ms,
                body_len = body.len(),
                "Decompile response received"
            ),
            InvocationOutcome::Timeout { .. } => tracing::warn!(
                url = %self.endpoint,
                elapsed_ms,
                timeout_ms,
                "Decompile request timed out"
            ),
            InvocationOutcome::TransportError { message } => tracing::error!(
                url = %self.endpoint,
                elapsed_ms,
                error = %message,
                "Decompile request failed"
            ),
            InvocationOutcome::ServerError { status_code } => tracing::warn!(
                url = %self.endpoint,
                elapsed_ms,
                status = status_code,
                "Decompile service returned an error status"
            ),
        }

        outcome
    }
}
