//! Permission store over the settings file
//!
//! Reads the whole settings document on every query/mutation and rewrites it
//! in full after every mutation. The file is formatted human-readable with
//! 4-space indentation so it can be inspected and hand-edited.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::sync::Mutex;

use crate::core::BotResult;
use crate::platform::{AdminRegistry, ThreadAdmins};

use super::document::{RevokeOutcome, SettingsDocument};

/// Store for per-thread, per-user command grants
///
/// Thread admins and the bot owner are not stored here; they are resolved
/// through the [`AdminRegistry`] and always pass permission checks.
pub struct PermissionStore {
    /// Path of the settings file
    path: PathBuf,
    /// Admin registry consulted for the admin/owner bypass
    admins: Arc<dyn AdminRegistry>,
    /// Serializes the load-mutate-save sequence of grant/revoke
    write_lock: Mutex<()>,
}

impl PermissionStore {
    /// Create a store over the given settings file
    pub fn new(path: impl Into<PathBuf>, admins: Arc<dyn AdminRegistry>) -> Self {
        Self {
            path: path.into(),
            admins,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the underlying settings file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings document
    ///
    /// A missing or empty file loads as an empty document. Malformed JSON
    /// surfaces as a serialization error.
    pub fn load(&self) -> BotResult<SettingsDocument> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SettingsDocument::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(SettingsDocument::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrite the settings file with the given document
    pub fn save(&self, document: &SettingsDocument) -> BotResult<()> {
        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);

        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        document.serialize(&mut serializer)?;
        serializer.into_inner().flush()?;

        Ok(())
    }

    /// Whether the user may invoke every one of the given commands in the
    /// thread
    ///
    /// Thread admins and the bot owner pass unconditionally. Everyone else
    /// passes only if their stored set contains every requested command.
    pub async fn user_has_permission(
        &self,
        thread_id: &str,
        user_id: &str,
        commands: &[String],
    ) -> BotResult<bool> {
        let admins = self.thread_admins_or_empty(thread_id).await;
        if admins.is_admin(user_id) {
            return Ok(true);
        }

        let document = self.load()?;
        Ok(document.contains_all(thread_id, user_id, commands))
    }

    /// Grant commands to a user in a thread
    ///
    /// Returns false without touching the file when the user already passes
    /// the permission check for all requested commands; a grant of a strict
    /// subset of held commands is skipped entirely, not partially applied.
    pub async fn grant(
        &self,
        thread_id: &str,
        user_id: &str,
        commands: &[String],
    ) -> BotResult<bool> {
        // An empty set would persist a hollow user record
        if commands.is_empty() {
            return Ok(false);
        }

        let _guard = self.write_lock.lock().await;

        if self.user_has_permission(thread_id, user_id, commands).await? {
            return Ok(false);
        }

        let mut document = self.load()?;
        document.append_permissions(thread_id, user_id, commands);
        self.save(&document)?;

        tracing::info!(
            "Granted {:?} to user {} in thread {}",
            commands,
            user_id,
            thread_id
        );
        Ok(true)
    }

    /// Revoke commands from a user in a thread
    ///
    /// Returns false when the thread or user record is absent. Empty records
    /// left behind by the removal are pruned before the file is rewritten.
    pub async fn revoke(
        &self,
        thread_id: &str,
        user_id: &str,
        commands: &[String],
    ) -> BotResult<bool> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.load()?;
        match document.remove_permissions(thread_id, user_id, commands) {
            RevokeOutcome::NotFound => Ok(false),
            RevokeOutcome::AlreadyEmpty => Ok(true),
            RevokeOutcome::Removed => {
                self.save(&document)?;
                tracing::info!(
                    "Revoked {:?} from user {} in thread {}",
                    commands,
                    user_id,
                    thread_id
                );
                Ok(true)
            }
        }
    }

    /// Resolve the thread's admin set, treating a registry failure as empty
    ///
    /// Failing open toward "not an admin" means an outage can only deny the
    /// bypass, never hand it out.
    async fn thread_admins_or_empty(&self, thread_id: &str) -> ThreadAdmins {
        match self.admins.thread_admins(thread_id).await {
            Ok(admins) => admins,
            Err(e) => {
                tracing::warn!("Admin lookup failed for thread {}: {}", thread_id, e);
                ThreadAdmins::default()
            }
        }
    }
}

impl std::fmt::Debug for PermissionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionStore")
            .field("path", &self.path)
            .finish()
    }
}
