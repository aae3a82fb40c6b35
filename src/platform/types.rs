//! Platform wire types

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A platform-provided reference to a tagged user within a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    /// The literal tag text as it appears in the message body (e.g. `@Ana`)
    pub tag: String,
    /// The tagged user's ID
    pub user_id: String,
}

impl Mention {
    /// Create a new mention
    pub fn new(tag: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            user_id: user_id.into(),
        }
    }
}

/// An inbound message as delivered by the platform listener
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEvent {
    /// Conversation/channel the message arrived in
    pub thread_id: String,
    /// User who sent the message
    pub sender_id: String,
    /// Raw message text
    pub body: String,
    /// Users explicitly tagged in the message
    pub mentions: Vec<Mention>,
}

impl MessageEvent {
    /// Create a message event without mentions
    pub fn new(
        thread_id: impl Into<String>,
        sender_id: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            thread_id: thread_id.into(),
            sender_id: sender_id.into(),
            body: body.into(),
            mentions: Vec::new(),
        }
    }

    /// Attach mentions to the event
    pub fn with_mentions(mut self, mentions: Vec<Mention>) -> Self {
        self.mentions = mentions;
        self
    }
}

/// An outbound message with optional mention metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutgoingMessage {
    /// Message text
    pub body: String,
    /// Mention metadata the platform renders as tags
    pub mentions: Vec<Mention>,
}

impl OutgoingMessage {
    /// Create a plain text message
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            mentions: Vec::new(),
        }
    }

    /// Attach mention metadata
    pub fn with_mentions(mut self, mentions: Vec<Mention>) -> Self {
        self.mentions = mentions;
        self
    }
}

/// Thread participant listing returned by the platform
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThreadInfo {
    /// IDs of every participant in the thread
    pub participant_ids: Vec<String>,
}

/// Display information for a single user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    /// Display name
    pub name: String,
}

/// Admin set for a thread, resolved by the admin registry
#[derive(Debug, Clone, Default)]
pub struct ThreadAdmins {
    /// Thread-level administrator user IDs
    pub admins: HashSet<String>,
    /// The bot owner's user ID
    pub bot_owner: String,
}

impl ThreadAdmins {
    /// Whether the user is a thread admin or the bot owner
    pub fn is_admin(&self, user_id: &str) -> bool {
        self.admins.contains(user_id) || self.bot_owner == user_id
    }
}
