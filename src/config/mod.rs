//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading
//! - Configuration validation
//! - Default value handling
//! - Secure token storage via [`SecretString`]
//!
//! # Example
//!
//! ```
//! use il_relay::config::{Config, SecretString, DEFAULT_DECOMPILE_URL};
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     repl_token: SecretString::new("example-token"),
//!     decompile_url: DEFAULT_DECOMPILE_URL.to_string(),
//!     paste_url: "https://hastebin.com".to_string(),
//!     log_level: "info".to_string(),
//!     request_timeout_ms: 30_000,
//!     paste_timeout_ms: 10_000,
//! };
//!
//! let debug = format!("{:?}", config);
//! assert!(debug.contains("<REDACTED>"));
//! assert!(!debug.contains("example-token"));
//! ```

mod secret;
mod validation;

pub use secret::SecretString;
pub use validation::{validate_config, MAX_TIMEOUT_MS, MIN_TIMEOUT_MS};

use crate::error::ConfigError;

/// Default decompile service endpoint.
pub const DEFAULT_DECOMPILE_URL: &str = "http://CSDiscord/Il";

/// Default paste service base URL.
pub const DEFAULT_PASTE_URL: &str = "https://hastebin.com";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default decompile request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Default paste upload timeout in milliseconds.
pub const DEFAULT_PASTE_TIMEOUT_MS: u64 = 10_000;

/// Application configuration.
///
/// Read once at startup and then shared read-only. Use [`Config::from_env`]
/// to load it from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Decompile service token, sent as `Authorization: Token <token>`.
    pub repl_token: SecretString,
    /// Decompile service endpoint.
    pub decompile_url: String,
    /// Paste service base URL.
    pub paste_url: String,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Wall-clock budget for a decompile request.
    pub request_timeout_ms: u64,
    /// Wall-clock budget for an overflow upload.
    pub paste_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `REPL_TOKEN`: decompile service token
    ///
    /// Optional environment variables (with defaults):
    /// - `DECOMPILE_URL` (default: `http://CSDiscord/Il`)
    /// - `PASTE_URL` (default: `https://hastebin.com`)
    /// - `LOG_LEVEL` (default: `info`)
    /// - `REQUEST_TIMEOUT_MS` (default: `30000`)
    /// - `PASTE_TIMEOUT_MS` (default: `10000`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `REPL_TOKEN` is missing, a timeout is not
    /// a valid integer, or any value fails [`validate_config`].
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let repl_token = std::env::var("REPL_TOKEN").map_err(|_| ConfigError::MissingRequired {
            var: "REPL_TOKEN".into(),
        })?;

        let config = Self {
            repl_token: SecretString::new(repl_token),
            decompile_url: env_or("DECOMPILE_URL", DEFAULT_DECOMPILE_URL),
            paste_url: env_or("PASTE_URL", DEFAULT_PASTE_URL),
            log_level: env_or("LOG_LEVEL", DEFAULT_LOG_LEVEL),
            request_timeout_ms: parse_env_u64("REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?,
            paste_timeout_ms: parse_env_u64("PASTE_TIMEOUT_MS", DEFAULT_PASTE_TIMEOUT_MS)?,
        };

        validate_config(&config)?;
        Ok(config)
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.into())
}

/// Parse an environment variable as u64, using a default if not set.
fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 6] = [
        "REPL_TOKEN",
        "DECOMPILE_URL",
        "PASTE_URL",
        "LOG_LEVEL",
        "REQUEST_TIMEOUT_MS",
        "PASTE_TIMEOUT_MS",
    ];

    fn setup_test_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        setup_test_env();
        env::set_var("REPL_TOKEN", "token-abc");

        let config = Config::from_env().expect("should load config");

        assert_eq!(config.repl_token.expose(), "token-abc");
        assert_eq!(config.decompile_url, DEFAULT_DECOMPILE_URL);
        assert_eq!(config.paste_url, DEFAULT_PASTE_URL);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        assert_eq!(config.paste_timeout_ms, DEFAULT_PASTE_TIMEOUT_MS);
        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_config_from_env_with_all_vars() {
        setup_test_env();
        env::set_var("REPL_TOKEN", "token-abc");
        env::set_var("DECOMPILE_URL", "http://localhost:5000/Il");
        env::set_var("PASTE_URL", "http://localhost:7777");
        env::set_var("LOG_LEVEL", "debug");
        env::set_var("REQUEST_TIMEOUT_MS", "45000");
        env::set_var("PASTE_TIMEOUT_MS", "5000");

        let config = Config::from_env().expect("should load config");

        assert_eq!(config.decompile_url, "http://localhost:5000/Il");
        assert_eq!(config.paste_url, "http://localhost:7777");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.request_timeout_ms, 45_000);
        assert_eq!(config.paste_timeout_ms, 5_000);
        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_config_missing_token() {
        setup_test_env();

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingRequired { var } if var == "REPL_TOKEN"
        ));
    }

    #[test]
    #[serial]
    fn test_config_invalid_timeout_format() {
        setup_test_env();
        env::set_var("REPL_TOKEN", "token-abc");
        env::set_var("REQUEST_TIMEOUT_MS", "soon");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { var, .. } if var == "REQUEST_TIMEOUT_MS"
        ));
        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_config_paste_timeout_out_of_range() {
        setup_test_env();
        env::set_var("REPL_TOKEN", "token-abc");
        env::set_var("PASTE_TIMEOUT_MS", "10");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { var, .. } if var == "PASTE_TIMEOUT_MS"
        ));
        setup_test_env();
    }

    #[test]
    #[serial]
    fn test_config_blank_token() {
        setup_test_env();
        env::set_var("REPL_TOKEN", "  ");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { var, .. } if var == "REPL_TOKEN"
        ));
        setup_test_env();
    }

    #[test]
    fn test_config_debug_redacts_token() {
        let config = Config {
            repl_token: SecretString::new("super-secret-token"),
            decompile_url: DEFAULT_DECOMPILE_URL.to_string(),
            paste_url: DEFAULT_PASTE_URL.to_string(),
            log_level: "debug".to_string(),
            request_timeout_ms: 5_000,
            paste_timeout_ms: 5_000,
        };

        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("<REDACTED>"));
        assert!(debug.contains("CSDiscord"));
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        env::set_var("IL_RELAY_TEST_U64", " 12345 ");
        assert_eq!(parse_env_u64("IL_RELAY_TEST_U64", 0).unwrap(), 12345);
        env::set_var("IL_RELAY_TEST_U64", "-3");
        assert!(parse_env_u64("IL_RELAY_TEST_U64", 0).is_err());
        env::remove_var("IL_RELAY_TEST_U64");
        assert_eq!(parse_env_u64("IL_RELAY_TEST_U64", 999).unwrap(), 999);
    }
}
