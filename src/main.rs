//! IL Relay binary entry point.
//!
//! Runs the `il` command once against the configured services. Code comes
//! from the arguments, or stdin when there are none. Each chat lifecycle
//! step is printed to stdout as one JSON line; logs go to stderr.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::json;
use tokio::io::AsyncReadExt;

use il_relay::command::{CommandContext, IlCommand};
use il_relay::config::Config;
use il_relay::error::{AppError, DeliveryError};
use il_relay::pipeline::HttpPipeline;
use il_relay::render::RenderedResult;
use il_relay::traits::{MessageId, ReplySink};

/// Prints every delivery as a JSON line on stdout.
#[derive(Debug, Default)]
struct ConsoleSink {
    next_id: AtomicU64,
}

impl ConsoleSink {
    fn emit(value: &serde_json::Value) {
        println!("{value}");
    }
}

#[async_trait]
impl ReplySink for ConsoleSink {
    async fn reply(&self, text: &str) -> Result<(), DeliveryError> {
        Self::emit(&json!({"action": "reply", "text": text}));
        Ok(())
    }

    async fn send_placeholder(&self, text: &str) -> Result<MessageId, DeliveryError> {
        let id = MessageId(self.next_id.fetch_add(1, Ordering::Relaxed));
        Self::emit(&json!({"action": "send", "id": id.0, "text": text}));
        Ok(id)
    }

    async fn edit_text(&self, id: MessageId, text: &str) -> Result<(), DeliveryError> {
        Self::emit(&json!({"action": "edit", "id": id.0, "text": text}));
        Ok(())
    }

    async fn replace_with_result(
        &self,
        id: MessageId,
        result: &RenderedResult,
    ) -> Result<(), DeliveryError> {
        Self::emit(&json!({
            "action": "replace",
            "id": id.0,
            "result": result,
            "fields": result.fields(),
        }));
        Ok(())
    }

    async fn delete_trigger(&self) -> Result<(), DeliveryError> {
        Self::emit(&json!({"action": "delete_trigger"}));
        Ok(())
    }
}

async fn read_code() -> Result<String, AppError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args.join(" "));
    }
    let mut code = String::new();
    tokio::io::stdin().read_to_string(&mut code).await?;
    Ok(code)
}

async fn run(config: &Config) -> Result<(), AppError> {
    let command = IlCommand::new(HttpPipeline::from_config(config)?);
    let actor = std::env::var("IL_ACTOR").unwrap_or_else(|_| "console".to_string());
    let code = read_code().await?;

    let outcome = command
        .handle(&CommandContext::guild(actor), &code, &ConsoleSink::default())
        .await?;
    tracing::debug!(?outcome, "il command finished");
    Ok(())
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    // Load configuration first so LOG_LEVEL can come from .env
    let config = Config::from_env();

    let log_level = config
        .as_ref()
        .map_or_else(|_| "info".to_string(), |c| c.log_level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            log_level
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Configuration loaded: decompile_url={}, timeout={}ms, paste_timeout={}ms",
        config.decompile_url,
        config.request_timeout_ms,
        config.paste_timeout_ms
    );

    if let Err(e) = run(&config).await {
        tracing::error!("il-relay error: {e}");
        std::process::exit(1);
    }
}
