//! End-to-end invocation pipeline.
//!
//! Sanitizer → Encoder → Invoker → Renderer. Each call to
//! [`DecompilePipeline::run`] is independent; the pipeline itself holds only
//! immutable collaborators and can be shared across tasks.

use crate::config::Config;
use crate::error::{ClientError, InputError};
use crate::format::InvocationRequest;
use crate::paste::{HastebinClient, OverflowUploader};
use crate::remote::DecompileClient;
use crate::render::{Rendered, ResultRenderer};
use crate::traits::{PasteService, RemoteExecutor};

/// Pipeline wired to the real HTTP services.
pub type HttpPipeline = DecompilePipeline<DecompileClient, HastebinClient>;

/// Runs one decompile invocation from raw input to rendering.
#[derive(Debug, Clone)]
pub struct DecompilePipeline<E, P> {
    executor: E,
    renderer: ResultRenderer<P>,
    timeout_ms: u64,
}

impl<E: RemoteExecutor, P: PasteService> DecompilePipeline<E, P> {
    /// Assemble a pipeline from its collaborators.
    ///
    /// `timeout_ms` bounds each remote invocation; `paste_timeout_ms` bounds
    /// each overflow upload.
    #[must_use]
    pub const fn new(executor: E, paste: P, timeout_ms: u64, paste_timeout_ms: u64) -> Self {
        Self {
            executor,
            renderer: ResultRenderer::new(OverflowUploader::new(paste, paste_timeout_ms)),
            timeout_ms,
        }
    }

    /// Remote invocation budget in milliseconds.
    #[must_use]
    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Validate and encode raw input without touching the network.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::TooLong`] for oversized input.
    pub fn prepare(&self, raw: &str) -> Result<InvocationRequest, InputError> {
        InvocationRequest::from_raw(raw)
    }

    /// Invoke the remote service for a prepared request and render the result.
    pub async fn execute(&self, request: InvocationRequest, actor_label: &str) -> Rendered {
        let InvocationRequest {
            sanitized_input,
            payload,
            ..
        } = request;

        let outcome = self.executor.invoke(payload, self.timeout_ms).await;
        tracing::info!(
            outcome = outcome.kind(),
            actor = actor_label,
            input_chars = sanitized_input.chars().count(),
            "Decompile invocation finished"
        );

        self.renderer
            .render(outcome, &sanitized_input, actor_label)
            .await
    }

    /// Sanitize, invoke, and render.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] before any network call when the input is
    /// rejected. Every remote failure is rendered, not returned.
    pub async fn run(&self, raw: &str, actor_label: &str) -> Result<Rendered, InputError> {
        let request = self.prepare(raw)?;
        Ok(self.execute(request, actor_label).await)
    }
}

impl HttpPipeline {
    /// Build the HTTP-backed pipeline from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if either HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let executor = DecompileClient::from_config(config)?;
        let paste = HastebinClient::from_config(config)?;
        tracing::debug!(
            endpoint = executor.endpoint(),
            paste_url = paste.base_url(),
            timeout_ms = config.request_timeout_ms,
            paste_timeout_ms = config.paste_timeout_ms,
            "HTTP pipeline ready"
        );
        Ok(Self::new(
            executor,
            paste,
            config.request_timeout_ms,
            config.paste_timeout_ms,
        ))
    }
}
