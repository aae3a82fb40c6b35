//! Command trait definition
//!
//! All bot commands implement this trait to provide a consistent interface.

use anyhow::Result;
use async_trait::async_trait;

use crate::platform::{MessageEvent, Mention};

use super::context::BotContext;

/// Name and access metadata for a registered command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
    /// Name of the command
    pub name: String,
    /// Whether the command is reserved for thread admins
    pub admin_only: bool,
}

/// An inbound message matched to a command
#[derive(Debug, Clone)]
pub struct CommandEvent {
    /// Thread the message arrived in
    pub thread_id: String,
    /// User who sent the message
    pub sender_id: String,
    /// Raw message text (prefix stripped)
    pub body: String,
    /// Capture groups from the command pattern, in order
    pub args: Vec<String>,
    /// Users explicitly tagged in the message
    pub mentions: Vec<Mention>,
}

impl CommandEvent {
    /// Build a command event from a message and its pattern captures
    pub fn from_message(message: &MessageEvent, body: &str, args: Vec<String>) -> Self {
        Self {
            thread_id: message.thread_id.clone(),
            sender_id: message.sender_id.clone(),
            body: body.to_string(),
            args,
            mentions: message.mentions.clone(),
        }
    }

    /// Get a capture group by index, empty if absent
    pub fn arg(&self, index: usize) -> &str {
        self.args.get(index).map(|s| s.as_str()).unwrap_or("")
    }
}

/// Trait for commands the bot can execute
///
/// The dispatcher matches inbound text against `pattern()`, gates execution
/// on the permission store, and calls `execute` with the matched event.
#[async_trait]
pub trait Command: Send + Sync {
    /// Get the name of this command
    fn name(&self) -> &str;

    /// Get a description of this command
    fn description(&self) -> &str;

    /// Get the usage text shown to users
    fn usage(&self) -> &str;

    /// Regex matched against prefix-stripped inbound text
    ///
    /// Capture groups become `CommandEvent::args`.
    fn pattern(&self) -> &str;

    /// Whether this command is reserved for thread admins
    ///
    /// Admin-only commands are also excluded from bulk grant/revoke.
    fn admin_only(&self) -> bool {
        false
    }

    /// Execute the command for a matched event
    async fn execute(&self, event: &CommandEvent, ctx: &BotContext) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_arg_out_of_range() {
        let message = MessageEvent::new("T1", "U1", "permission list");
        let event = CommandEvent::from_message(&message, "permission list", vec!["list".into()]);

        assert_eq!(event.arg(0), "list");
        assert_eq!(event.arg(1), "");
        assert_eq!(event.arg(7), "");
    }
}
