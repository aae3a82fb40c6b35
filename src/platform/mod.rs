//! Messaging-platform collaborator seam
//!
//! This module provides:
//! - `ChatPlatform` trait - outbound messages and thread/user info lookups
//! - `AdminRegistry` trait - thread admin and bot owner resolution
//! - Wire types: `MessageEvent`, `OutgoingMessage`, `Mention`, `ThreadInfo`,
//!   `UserInfo`, `ThreadAdmins`
//!
//! The crate ships no network client; embedding applications implement these
//! traits against their platform API.

mod traits;
mod types;

pub use traits::{AdminRegistry, ChatPlatform};
pub use types::{Mention, MessageEvent, OutgoingMessage, ThreadAdmins, ThreadInfo, UserInfo};
