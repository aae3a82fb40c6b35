//! Command system for the bot
//!
//! This module provides:
//! - `Command` trait - interface for implementing bot commands
//! - `CommandEvent` - a matched inbound message with its capture groups
//! - `CommandRegistry` - registration, `{name, admin_only}` enumeration, and
//!   regex matching of inbound text
//! - `BotContext` - shared collaborator handles passed to commands
//! - `Dispatcher` - prefix stripping, matching, and the permission gate
//! - `PermissionCommand` - grant/revoke/list of per-thread command access

mod command;
mod context;
mod dispatcher;
mod permission;
mod registry;

pub use command::{Command, CommandEvent, CommandInfo};
pub use context::BotContext;
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use permission::PermissionCommand;
pub use registry::{CommandMatch, CommandRegistry};
