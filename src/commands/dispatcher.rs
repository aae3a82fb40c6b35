//! Command dispatcher
//!
//! Strips the command prefix from inbound messages, matches the registry,
//! gates execution on the permission store, and invokes the command.

use anyhow::{Context, Result};

use crate::config::BotConfig;
use crate::platform::MessageEvent;

use super::command::CommandEvent;
use super::context::BotContext;

/// What the dispatcher did with an inbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The message did not carry the command prefix
    NotACommand,
    /// No registered pattern matched
    NoMatch,
    /// A command matched but the sender is not allowed to use it
    Denied,
    /// The command ran
    Handled,
}

/// Dispatches inbound messages to registered commands
///
/// One message is processed per call; the caller drives the event loop.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    /// Prefix marking a message as a command (e.g. `/`)
    prefix: String,
}

impl Dispatcher {
    /// Create a dispatcher with the given command prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Create a dispatcher from a bot configuration
    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(config.command_prefix.clone())
    }

    /// Process one inbound message
    ///
    /// Thread admins and the bot owner pass the permission gate
    /// unconditionally; everyone else needs a stored grant for the matched
    /// command. Admin-only commands dispatch for admins alone, stored grants
    /// notwithstanding.
    pub async fn dispatch(
        &self,
        message: &MessageEvent,
        ctx: &BotContext,
    ) -> Result<DispatchOutcome> {
        let body = message.body.trim();
        let text = match body.strip_prefix(&self.prefix) {
            Some(rest) => rest.trim_start(),
            None => return Ok(DispatchOutcome::NotACommand),
        };

        let matched = match ctx.commands.find_match(text) {
            Some(matched) => matched,
            None => {
                tracing::debug!("No command matched: {}", text);
                return Ok(DispatchOutcome::NoMatch);
            }
        };
        let command = matched.command.clone();

        let allowed = if command.admin_only() {
            match ctx.admins.thread_admins(&message.thread_id).await {
                Ok(admins) => admins.is_admin(&message.sender_id),
                Err(e) => {
                    tracing::warn!(
                        "Admin lookup failed for thread {}: {}",
                        message.thread_id,
                        e
                    );
                    false
                }
            }
        } else {
            ctx.store
                .user_has_permission(
                    &message.thread_id,
                    &message.sender_id,
                    &[command.name().to_string()],
                )
                .await?
        };

        if !allowed {
            tracing::info!(
                "User {} denied command {} in thread {}",
                message.sender_id,
                command.name(),
                message.thread_id
            );
            ctx.reply(
                &message.thread_id,
                format!("You are not allowed to use {}.", command.name()),
            )
            .await?;
            return Ok(DispatchOutcome::Denied);
        }

        let event = CommandEvent::from_message(message, text, matched.args);
        tracing::info!("Executing command: {}", command.name());
        command
            .execute(&event, ctx)
            .await
            .with_context(|| format!("Command {} failed", command.name()))?;

        Ok(DispatchOutcome::Handled)
    }
}
