//! Collaborator traits for the messaging platform and admin registry

use std::collections::HashMap;

use async_trait::async_trait;

use crate::core::BotResult;

use super::types::{OutgoingMessage, ThreadAdmins, ThreadInfo, UserInfo};

/// Outbound side of the messaging platform
///
/// Implementations wrap the platform's network API. Timeout and retry
/// behavior belongs to the implementation; this crate does not add any.
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Send a message to a thread
    async fn send_message(&self, thread_id: &str, message: OutgoingMessage) -> BotResult<()>;

    /// Fetch participant information for a thread
    async fn thread_info(&self, thread_id: &str) -> BotResult<ThreadInfo>;

    /// Fetch display information for a set of users
    async fn user_info(&self, user_ids: &[String]) -> BotResult<HashMap<String, UserInfo>>;
}

/// Resolves thread administrators and the bot owner
///
/// Queried by thread ID. Callers treat a lookup failure as an empty admin
/// set, so an outage denies admin bypass rather than granting it.
#[async_trait]
pub trait AdminRegistry: Send + Sync {
    /// Look up the admin set for a thread
    async fn thread_admins(&self, thread_id: &str) -> BotResult<ThreadAdmins>;
}
