//! Redacting wrapper for the decompile service token.

use std::fmt;

/// A credential that never shows up in `Debug`/`Display` output.
///
/// The decompile service token is process-wide configuration and ends up in
/// `Config`, which is logged at startup. Wrapping it keeps it out of logs.
///
/// # Example
///
/// ```
/// use il_relay::config::SecretString;
///
/// let token = SecretString::new("repl-token-123");
/// assert_eq!(format!("{:?}", token), "<REDACTED>");
/// assert_eq!(token.expose(), "repl-token-123");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Wraps a credential.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw credential. Only call this when building a request.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns true if the credential is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<REDACTED>")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<REDACTED>")
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
