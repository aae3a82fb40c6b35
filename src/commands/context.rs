//! Shared collaborator handles passed to commands

use std::sync::Arc;

use crate::core::BotResult;
use crate::platform::{AdminRegistry, ChatPlatform, OutgoingMessage};
use crate::store::PermissionStore;

use super::registry::CommandRegistry;

/// Everything a command needs to act on the outside world
///
/// Built once by the embedding application and shared across dispatches.
#[derive(Clone)]
pub struct BotContext {
    /// Outbound messaging and thread/user lookups
    pub platform: Arc<dyn ChatPlatform>,
    /// Thread admin resolution
    pub admins: Arc<dyn AdminRegistry>,
    /// The permission settings store
    pub store: Arc<PermissionStore>,
    /// Registered commands
    pub commands: Arc<CommandRegistry>,
}

impl BotContext {
    /// Create a context from its collaborator handles
    pub fn new(
        platform: Arc<dyn ChatPlatform>,
        admins: Arc<dyn AdminRegistry>,
        store: Arc<PermissionStore>,
        commands: Arc<CommandRegistry>,
    ) -> Self {
        Self {
            platform,
            admins,
            store,
            commands,
        }
    }

    /// Send a plain text reply to a thread
    pub async fn reply(&self, thread_id: &str, text: impl Into<String>) -> BotResult<()> {
        self.platform
            .send_message(thread_id, OutgoingMessage::text(text))
            .await
    }
}

impl std::fmt::Debug for BotContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotContext")
            .field("store", &self.store)
            .field("commands", &self.commands)
            .finish()
    }
}
