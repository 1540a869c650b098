//! Offloading of results too large to show inline.

use std::time::Duration;

use crate::error::PasteError;
use crate::traits::PasteService;

/// Inline display limit for result bodies, in characters.
///
/// Leaves room under the chat platform's 1024-character field limit for
/// the code fence chrome.
pub const DISPLAY_THRESHOLD: usize = 990;

/// What happened to an oversized result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overflow {
    /// The body fit inline; nothing was uploaded.
    None,
    /// The full body was uploaded here.
    Reference(String),
    /// The upload failed with this message.
    Failure(String),
}

/// Uploads oversized bodies through a [`PasteService`].
///
/// Makes at most one attempt per call, bounded by `timeout_ms`.
#[derive(Debug, Clone)]
pub struct OverflowUploader<P> {
    paste: P,
    timeout_ms: u64,
}

impl<P: PasteService> OverflowUploader<P> {
    /// Create an uploader with its own wall-clock bound.
    #[must_use]
    pub const fn new(paste: P, timeout_ms: u64) -> Self {
        Self { paste, timeout_ms }
    }

    /// Upload `body` if it is longer than `threshold` characters.
    ///
    /// Failures are returned as [`Overflow::Failure`], never propagated.
    pub async fn upload_if_oversized(&self, body: &str, threshold: usize) -> Overflow {
        let length = body.chars().count();
        if length <= threshold {
            return Overflow::None;
        }

        tracing::debug!(length, threshold, "Result exceeds display threshold");

        let result = tokio::time::timeout(
            Duration::from_millis(self.timeout_ms),
            self.paste.upload_code(body),
        )
        .await
        .unwrap_or(Err(PasteError::Timeout {
            timeout_ms: self.timeout_ms,
        }));

        match result {
            Ok(url) => Overflow::Reference(url),
            Err(e) => {
                tracing::warn!(error = %e, "Overflow upload failed");
                Overflow::Failure(e.to_string())
            }
        }
    }
}
