//! The `il` chat command.
//!
//! Wraps [`DecompilePipeline`] in the chat message lifecycle:
//!
//! 1. refuse outside public guild channels
//! 2. refuse oversized input with a plain reply
//! 3. post a "Working..." placeholder
//! 4. edit the placeholder with the terminal text, or replace it with the
//!    structured result and delete the triggering message

use crate::error::DeliveryError;
use crate::pipeline::DecompilePipeline;
use crate::render::{Rendered, RenderedResult, TerminalMessage};
use crate::traits::{PasteService, RemoteExecutor, ReplySink};

/// Command name as typed by users.
pub const COMMAND_NAME: &str = "il";

/// Reply sent when the command is used outside a guild channel.
pub const GUILD_ONLY_MESSAGE: &str = "il can only be executed in public guild channels.";

/// Placeholder shown while the remote call is in flight.
pub const WORKING_MESSAGE: &str = "Working...";

/// Where the command was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// A public channel in a guild.
    Guild,
    /// A direct message or group DM.
    Private,
}

/// Caller-supplied context for one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    /// Display name of the invoking user.
    pub actor_label: String,
    /// Channel the command arrived in.
    pub channel: ChannelKind,
}

impl CommandContext {
    /// Context for a guild channel invocation.
    #[must_use]
    pub fn guild(actor_label: impl Into<String>) -> Self {
        Self {
            actor_label: actor_label.into(),
            channel: ChannelKind::Guild,
        }
    }

    /// Context for a private channel invocation.
    #[must_use]
    pub fn private(actor_label: impl Into<String>) -> Self {
        Self {
            actor_label: actor_label.into(),
            channel: ChannelKind::Private,
        }
    }
}

/// How a command invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Refused before any network call; the reply text.
    Rejected(String),
    /// The remote call failed; the placeholder now shows this text.
    Terminal(TerminalMessage),
    /// The result replaced the placeholder.
    Delivered(RenderedResult),
}

/// The `il` command.
#[derive(Debug, Clone)]
pub struct IlCommand<E, P> {
    pipeline: DecompilePipeline<E, P>,
}

impl<E: RemoteExecutor, P: PasteService> IlCommand<E, P> {
    /// Create the command around a pipeline.
    #[must_use]
    pub const fn new(pipeline: DecompilePipeline<E, P>) -> Self {
        Self { pipeline }
    }

    /// Handle one invocation, delivering every message through `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] if the sink fails. Remote failures are
    /// delivered as text and reported through [`CommandOutcome::Terminal`].
    pub async fn handle<S>(
        &self,
        context: &CommandContext,
        raw: &str,
        sink: &S,
    ) -> Result<CommandOutcome, DeliveryError>
    where
        S: ReplySink + ?Sized,
    {
        if context.channel != ChannelKind::Guild {
            tracing::info!(
                command = COMMAND_NAME,
                actor = %context.actor_label,
                "Refused outside a guild channel"
            );
            sink.reply(GUILD_ONLY_MESSAGE).await?;
            return Ok(CommandOutcome::Rejected(GUILD_ONLY_MESSAGE.to_string()));
        }

        let request = match self.pipeline.prepare(raw) {
            Ok(request) => request,
            Err(e) => {
                tracing::info!(
                    command = COMMAND_NAME,
                    error = %e,
                    actor = %context.actor_label,
                    "Rejected input"
                );
                let text = format!("Decompile Failed: {e}");
                sink.reply(&text).await?;
                return Ok(CommandOutcome::Rejected(text));
            }
        };

        let placeholder = sink.send_placeholder(WORKING_MESSAGE).await?;

        match self.pipeline.execute(request, &context.actor_label).await {
            Rendered::Terminal { message } => {
                sink.edit_text(placeholder, message.as_str()).await?;
                Ok(CommandOutcome::Terminal(message))
            }
            Rendered::Result(result) => {
                sink.replace_with_result(placeholder, &result).await?;
                sink.delete_trigger().await?;
                Ok(CommandOutcome::Delivered(result))
            }
        }
    }
}
