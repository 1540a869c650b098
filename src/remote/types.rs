//! Outcome of a single decompile invocation.

use reqwest::StatusCode;

/// Classified result of one remote call.
///
/// Exactly one variant describes each invocation. None of them is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    /// The service answered with content to render (2xx or 400).
    Success {
        /// Response body text.
        body: String,
    },
    /// No complete response arrived within the budget.
    Timeout {
        /// Budget that expired, in milliseconds.
        timeout_ms: u64,
    },
    /// The request failed below HTTP (connect, I/O, body decode).
    TransportError {
        /// Underlying error text.
        message: String,
    },
    /// The service answered with an unexpected status.
    ServerError {
        /// HTTP status code.
        status_code: u16,
    },
}

impl InvocationOutcome {
    /// Short name used in log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::Timeout { .. } => "timeout",
            Self::TransportError { .. } => "transport_error",
            Self::ServerError { .. } => "server_error",
        }
    }
}

/// Whether a response with `status` carries content to render.
///
/// The decompile service answers 400 for code that fails to compile, and
/// that diagnostic output is shown to the user like any other result.
#[must_use]
pub fn accepts_status(status: StatusCode) -> bool {
    status.is_success() || status == StatusCode::BAD_REQUEST
}
