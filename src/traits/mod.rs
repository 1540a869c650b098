//! Trait definitions for mockable collaborators.
//!
//! This module defines traits for:
//! - [`RemoteExecutor`]: the decompile service
//! - [`PasteService`]: the overflow paste service
//! - [`ReplySink`]: the chat layer that delivers messages
//!
//! # Mocking
//!
//! All traits are annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates mock implementations automatically for testing.

use async_trait::async_trait;

use crate::error::{DeliveryError, PasteError};
use crate::format::EncodedPayload;
use crate::remote::InvocationOutcome;
use crate::render::RenderedResult;

/// Remote decompile service abstraction.
///
/// Implementations make at most one remote attempt per call and never
/// return an error: every failure is classified into an
/// [`InvocationOutcome`] variant.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteExecutor: Send + Sync {
    /// Send `payload` and wait at most `timeout_ms` for the full response.
    async fn invoke(&self, payload: EncodedPayload, timeout_ms: u64) -> InvocationOutcome;
}

/// Paste service abstraction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasteService: Send + Sync {
    /// Upload `text` and return a URL where it can be viewed.
    ///
    /// # Errors
    ///
    /// Returns [`PasteError`] if the upload fails. Uploading the same text
    /// twice may yield different URLs.
    async fn upload_code(&self, text: &str) -> Result<String, PasteError>;
}

/// Identifier of a message previously sent through a [`ReplySink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(pub u64);

/// Chat delivery abstraction.
///
/// The chat platform owns message lifecycle; the command only tells it
/// what to show.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Reply in the invoking channel with plain text.
    async fn reply(&self, text: &str) -> Result<(), DeliveryError>;

    /// Send a placeholder message that will be edited later.
    async fn send_placeholder(&self, text: &str) -> Result<MessageId, DeliveryError>;

    /// Replace the text of a previously sent message.
    async fn edit_text(&self, id: MessageId, text: &str) -> Result<(), DeliveryError>;

    /// Replace a previously sent message with a structured result.
    async fn replace_with_result(
        &self,
        id: MessageId,
        result: &RenderedResult,
    ) -> Result<(), DeliveryError>;

    /// Delete the message that triggered the command.
    async fn delete_trigger(&self) -> Result<(), DeliveryError>;
}
