//! Permission settings store
//!
//! This module provides:
//! - `SettingsDocument` / `ThreadRecord` / `UserRecord` - the persisted model
//! - `PermissionStore` - load/save plus the grant, revoke, and check
//!   operations over the settings file
//!
//! The whole document is read at the start of every query or mutation and
//! rewritten in full at the end of every mutation. Mutations run under a
//! single in-process mutex so two commands touching the same file cannot
//! lose each other's update.

mod document;
mod store;

pub use document::{RevokeOutcome, SettingsDocument, ThreadRecord, UserRecord};
pub use store::PermissionStore;
