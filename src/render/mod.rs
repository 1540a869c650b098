//! Rendering of invocation outcomes.
//!
//! Failures become a [`TerminalMessage`]. Successful responses become a
//! [`RenderedResult`], which mirrors a chat embed: title, author, status,
//! color, and a list of fields.
//!
//! # Example
//!
//! ```
//! use il_relay::render::{ColorTag, StatusLabel};
//!
//! assert_eq!(StatusLabel::Failed.as_str(), "Failed");
//! assert_eq!(ColorTag::Success.rgb(), (0, 255, 0));
//! ```

use serde::Serialize;

use crate::format::{code_block, truncate_to};
use crate::paste::{Overflow, OverflowUploader, DISPLAY_THRESHOLD};
use crate::remote::InvocationOutcome;
use crate::traits::PasteService;

/// Title of every structured result.
pub const RESULT_TITLE: &str = "Decompile Result";

/// Substring the decompile service emits when compilation failed.
pub const FAILURE_MARKER: &str = "Emit Failed";

/// Language tag for the input echo.
pub const INPUT_LANGUAGE: &str = "cs";

/// Language tag for the result body.
pub const RESULT_LANGUAGE: &str = "asm";

/// Execution status shown in the result description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusLabel {
    /// The service produced output without the failure marker.
    Successful,
    /// The output contains the failure marker.
    Failed,
}

impl StatusLabel {
    /// Display text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Successful => "Successful",
            Self::Failed => "Failed",
        }
    }
}

/// Accent color of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    /// Green.
    Success,
    /// Red.
    Failure,
}

impl ColorTag {
    /// RGB components.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Success => (0, 255, 0),
            Self::Failure => (255, 0, 0),
        }
    }
}

/// One named field of a rendered result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    /// Field heading.
    pub name: String,
    /// Field content (Markdown).
    pub value: String,
}

impl EmbedField {
    fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Structured result of a successful invocation.
///
/// `result_body` never exceeds [`DISPLAY_THRESHOLD`] characters. At most
/// one of `overflow_reference` / `overflow_error` is set, and only when the
/// untruncated body was longer than the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedResult {
    /// Result title.
    pub title: String,
    /// Display name of the user who ran the command.
    pub author: String,
    /// Execution status.
    pub status_label: StatusLabel,
    /// Accent color.
    pub color: ColorTag,
    /// Submitted code, echoed back.
    pub input_echo: String,
    /// Result text, truncated for inline display.
    pub result_body: String,
    /// Link to the full result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow_reference: Option<String>,
    /// Why the full result could not be uploaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow_error: Option<String>,
}

impl RenderedResult {
    /// Embed fields in display order.
    #[must_use]
    pub fn fields(&self) -> Vec<EmbedField> {
        let mut fields = vec![
            EmbedField::new("Code", code_block(&self.input_echo, INPUT_LANGUAGE)),
            EmbedField::new("Result:", code_block(&self.result_body, RESULT_LANGUAGE)),
        ];

        if let Some(url) = &self.overflow_reference {
            fields.push(EmbedField::new("More...", format!("[View on Hastebin]({url})")));
        } else if let Some(error) = &self.overflow_error {
            fields.push(EmbedField::new("More...", error.clone()));
        }

        fields
    }
}

/// Plain-text message shown instead of a structured result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerminalMessage(pub String);

impl TerminalMessage {
    /// Message text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Final rendering of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rendered {
    /// The invocation failed; show this text.
    Terminal {
        /// Text to show.
        message: TerminalMessage,
    },
    /// The invocation produced output.
    Result(RenderedResult),
}

/// Turns outcomes into renderings, uploading oversized bodies on the way.
#[derive(Debug, Clone)]
pub struct ResultRenderer<P> {
    uploader: OverflowUploader<P>,
}

impl<P: PasteService> ResultRenderer<P> {
    /// Create a renderer backed by `uploader`.
    #[must_use]
    pub const fn new(uploader: OverflowUploader<P>) -> Self {
        Self { uploader }
    }

    /// Render `outcome`.
    ///
    /// Only [`InvocationOutcome::Success`] may trigger an upload.
    pub async fn render(
        &self,
        outcome: InvocationOutcome,
        input_echo: &str,
        actor_label: &str,
    ) -> Rendered {
        let body = match outcome {
            InvocationOutcome::Success { body } => body,
            failure => {
                return Rendered::Terminal {
                    message: terminal_message(&failure),
                }
            }
        };

        let failed = body.contains(FAILURE_MARKER);
        let (status_label, color) = if failed {
            (StatusLabel::Failed, ColorTag::Failure)
        } else {
            (StatusLabel::Successful, ColorTag::Success)
        };

        let (overflow_reference, overflow_error) = match self
            .uploader
            .upload_if_oversized(&body, DISPLAY_THRESHOLD)
            .await
        {
            Overflow::None => (None, None),
            Overflow::Reference(url) => (Some(url), None),
            Overflow::Failure(message) => (None, Some(message)),
        };

        Rendered::Result(RenderedResult {
            title: RESULT_TITLE.to_string(),
            author: actor_label.to_string(),
            status_label,
            color,
            input_echo: input_echo.to_string(),
            result_body: truncate_to(&body, DISPLAY_THRESHOLD),
            overflow_reference,
            overflow_error,
        })
    }
}

/// Text for an outcome that produces no structured result.
///
/// Success outcomes are rendered by [`ResultRenderer::render`] instead; for
/// them this returns the body verbatim.
#[must_use]
pub fn terminal_message(outcome: &InvocationOutcome) -> TerminalMessage {
    let text = match outcome {
        InvocationOutcome::Timeout { .. } => {
            "Gave up waiting for a response from the Decompile service.".to_string()
        }
        InvocationOutcome::TransportError { message } => format!("Decompile failed: {message}"),
        InvocationOutcome::ServerError { status_code } => {
            let reason = reqwest::StatusCode::from_u16(*status_code)
                .ok()
                .and_then(|s| s.canonical_reason());
            match reason {
                Some(reason) => format!("Decompile failed: {status_code} {reason}"),
                None => format!("Decompile failed: {status_code}"),
            }
        }
        InvocationOutcome::Success { body } => body.clone(),
    };
    TerminalMessage(text)
}
