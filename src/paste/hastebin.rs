//! Hastebin-compatible paste client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{ClientError, PasteError};
use crate::traits::PasteService;

/// Body returned by `POST /documents`.
#[derive(Debug, Deserialize)]
struct DocumentResponse {
    key: String,
}

/// Uploads text to a Hastebin server.
#[derive(Debug, Clone)]
pub struct HastebinClient {
    client: Client,
    base_url: String,
    timeout_ms: u64,
}

impl HastebinClient {
    /// Create a client for the server at `base_url`.
    ///
    /// The timeout bounds each upload end to end.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| ClientError::Build {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms,
        })
    }

    /// Create a client from application configuration.
    ///
    /// # Errors
    ///
    /// See [`HastebinClient::new`].
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Self::new(config.paste_url.clone(), config.paste_timeout_ms)
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PasteService for HastebinClient {
    async fn upload_code(&self, text: &str) -> Result<String, PasteError> {
        let url = format!("{}/documents", self.base_url);

        tracing::debug!(url = %url, bytes = text.len(), "Uploading to paste service");

        let response = self
            .client
            .post(&url)
            .body(text.to_string())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PasteError::Timeout {
                        timeout_ms: self.timeout_ms,
                    }
                } else {
                    PasteError::Network {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Paste service rejected upload");
            return Err(PasteError::Rejected {
                status_code: status.as_u16(),
            });
        }

        let document: DocumentResponse =
            response
                .json()
                .await
                .map_err(|e| PasteError::UnexpectedResponse {
                    message: e.to_string(),
                })?;

        Ok(format!("{}/{}", self.base_url, document.key))
    }
}
