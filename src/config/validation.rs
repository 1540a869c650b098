//! Configuration validation.
//!
//! Range and shape checks applied after loading, so a bad value fails at
//! startup instead of on the first invocation.

use super::Config;
use crate::error::ConfigError;

/// Minimum allowed timeout in milliseconds (1 second).
pub const MIN_TIMEOUT_MS: u64 = 1000;

/// Maximum allowed timeout in milliseconds (5 minutes).
pub const MAX_TIMEOUT_MS: u64 = 300_000;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if:
/// - `REPL_TOKEN` is blank
/// - `DECOMPILE_URL` or `PASTE_URL` is not an http(s) URL
/// - `REQUEST_TIMEOUT_MS` or `PASTE_TIMEOUT_MS` is outside 1000..=300000
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.repl_token.is_blank() {
        return Err(ConfigError::InvalidValue {
            var: "REPL_TOKEN".into(),
            reason: "must not be empty".into(),
        });
    }

    check_url("DECOMPILE_URL", &config.decompile_url)?;
    check_url("PASTE_URL", &config.paste_url)?;
    check_timeout("REQUEST_TIMEOUT_MS", config.request_timeout_ms)?;
    check_timeout("PASTE_TIMEOUT_MS", config.paste_timeout_ms)?;

    Ok(())
}

fn check_url(var: &str, url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            var: var.into(),
            reason: "must start with http:// or https://".into(),
        })
    }
}

fn check_timeout(var: &str, timeout_ms: u64) -> Result<(), ConfigError> {
    if (MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&timeout_ms) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            var: var.into(),
            reason: format!("must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS} ms"),
        })
    }
}
