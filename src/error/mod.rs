//! Error types for the IL relay.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`InputError`]: Pre-flight input rejections
//! - [`PasteError`]: Paste service failures
//! - [`ClientError`]: HTTP client construction failures
//! - [`DeliveryError`]: Chat delivery failures reported by a reply sink
//! - [`ConfigError`]: Configuration errors
//!
//! Remote invocation failures are not errors here: they are reported as
//! [`InvocationOutcome`](crate::remote::InvocationOutcome) variants.
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// Returned by the binary's entry points. Input and paste failures are
/// delivered to the user as text and never reach this level.
#[derive(Debug, Error)]
pub enum AppError {
    /// HTTP client error.
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// Delivery error.
    #[error("Delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Input errors.
///
/// Raised by the sanitizer before any network call is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Sanitized code exceeds the maximum accepted length.
    #[error("Code is greater than {max} characters in length")]
    TooLong {
        /// Length of the sanitized input in characters.
        length: usize,
        /// Maximum accepted length.
        max: usize,
    },
}

/// Paste service errors.
///
/// These never abort rendering; the message is shown in place of the
/// overflow link.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasteError {
    /// Network communication error.
    #[error("{message}")]
    Network {
        /// Description of the network error.
        message: String,
    },

    /// The upload did not finish within its bound.
    #[error("Gave up waiting for the paste service after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// The service answered with a non-success status.
    #[error("Something failed while uploading to Hastebin")]
    Rejected {
        /// HTTP status code returned by the service.
        status_code: u16,
    },

    /// The service answered but the body could not be understood.
    #[error("Unexpected paste response: {message}")]
    UnexpectedResponse {
        /// Description of what was unexpected.
        message: String,
    },
}

/// HTTP client construction errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The underlying client could not be built.
    #[error("Failed to create HTTP client: {message}")]
    Build {
        /// Description of the failure.
        message: String,
    },

    /// The authorization credential is not a valid header value.
    #[error("Invalid authorization token")]
    InvalidToken,
}

/// Errors reported by a reply sink while delivering messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to {action}: {message}")]
pub struct DeliveryError {
    /// What the sink was doing.
    pub action: String,
    /// Description of the failure.
    pub message: String,
}

impl DeliveryError {
    /// Create a new delivery error.
    #[must_use]
    pub fn new(action: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            message: message.into(),
        }
    }
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
