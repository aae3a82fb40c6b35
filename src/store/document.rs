//! Settings document model
//!
//! The entire persisted state: a mapping from thread ID to the users holding
//! explicit command grants in that thread. Records that become empty are
//! pruned rather than persisted, so the document never carries hollow levels.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Commands a single user may invoke in a single thread
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Granted command names. Stored as a sequence but treated as a set;
    /// repeated grants can leave duplicates behind.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl UserRecord {
    /// Whether the stored set contains every one of the given commands
    pub fn holds_all(&self, commands: &[String]) -> bool {
        commands.iter().all(|c| self.permissions.contains(c))
    }
}

/// Per-thread state: the users with explicit grants
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadRecord {
    /// User ID -> granted commands
    #[serde(default)]
    pub users: HashMap<String, UserRecord>,
}

impl ThreadRecord {
    /// Look up a user's record
    pub fn user(&self, user_id: &str) -> Option<&UserRecord> {
        self.users.get(user_id)
    }

    /// Get a user's record, creating it if absent
    pub fn user_mut(&mut self, user_id: &str) -> &mut UserRecord {
        self.users.entry(user_id.to_string()).or_default()
    }
}

/// Outcome of removing permissions from a user record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevokeOutcome {
    /// Thread record or user record was absent; nothing to do
    NotFound,
    /// The permission list was already empty; nothing changed
    AlreadyEmpty,
    /// Permissions were filtered out and empty records pruned
    Removed,
}

/// The whole settings file: thread ID -> thread record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsDocument {
    threads: HashMap<String, ThreadRecord>,
}

impl SettingsDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the document holds no thread records
    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }

    /// Look up a thread record
    pub fn thread(&self, thread_id: &str) -> Option<&ThreadRecord> {
        self.threads.get(thread_id)
    }

    /// Get a thread record, creating it if absent
    pub fn thread_mut(&mut self, thread_id: &str) -> &mut ThreadRecord {
        self.threads.entry(thread_id.to_string()).or_default()
    }

    /// Look up a user's record in a thread
    pub fn user(&self, thread_id: &str, user_id: &str) -> Option<&UserRecord> {
        self.thread(thread_id).and_then(|t| t.user(user_id))
    }

    /// Whether the user's stored set contains every one of the given commands
    ///
    /// An absent thread or user record counts as not holding anything.
    pub fn contains_all(&self, thread_id: &str, user_id: &str, commands: &[String]) -> bool {
        match self.user(thread_id, user_id) {
            Some(user) => user.holds_all(commands),
            None => false,
        }
    }

    /// Append commands to a user's permission list, creating thread and user
    /// records as needed
    pub fn append_permissions(&mut self, thread_id: &str, user_id: &str, commands: &[String]) {
        let user = self.thread_mut(thread_id).user_mut(user_id);
        user.permissions.extend(commands.iter().cloned());
    }

    /// Filter the given commands out of a user's permission list, pruning the
    /// user record and then the thread record if they become empty
    pub fn remove_permissions(
        &mut self,
        thread_id: &str,
        user_id: &str,
        commands: &[String],
    ) -> RevokeOutcome {
        let thread = match self.threads.get_mut(thread_id) {
            Some(thread) => thread,
            None => return RevokeOutcome::NotFound,
        };
        let user = match thread.users.get_mut(user_id) {
            Some(user) => user,
            None => return RevokeOutcome::NotFound,
        };

        if user.permissions.is_empty() {
            return RevokeOutcome::AlreadyEmpty;
        }

        user.permissions.retain(|p| !commands.contains(p));

        // Prune user, then thread
        if user.permissions.is_empty() {
            thread.users.remove(user_id);
        }
        if thread.users.is_empty() {
            self.threads.remove(thread_id);
        }

        RevokeOutcome::Removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmds(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_append_creates_nested_records() {
        let mut doc = SettingsDocument::new();
        doc.append_permissions("T1", "U1", &cmds(&["meme"]));

        let user = doc.user("T1", "U1").unwrap();
        assert_eq!(user.permissions, vec!["meme".to_string()]);
    }

    #[test]
    fn test_contains_all_is_conjunctive() {
        let mut doc = SettingsDocument::new();
        doc.append_permissions("T1", "U1", &cmds(&["meme"]));

        assert!(doc.contains_all("T1", "U1", &cmds(&["meme"])));
        assert!(!doc.contains_all("T1", "U1", &cmds(&["meme", "ban"])));
        assert!(!doc.contains_all("T1", "U2", &cmds(&["meme"])));
        assert!(!doc.contains_all("T2", "U1", &cmds(&["meme"])));
    }

    #[test]
    fn test_append_keeps_duplicates() {
        let mut doc = SettingsDocument::new();
        doc.append_permissions("T1", "U1", &cmds(&["meme"]));
        doc.append_permissions("T1", "U1", &cmds(&["meme", "quote"]));

        let user = doc.user("T1", "U1").unwrap();
        assert_eq!(user.permissions, cmds(&["meme", "meme", "quote"]));
    }

    #[test]
    fn test_remove_prunes_user_and_thread() {
        let mut doc = SettingsDocument::new();
        doc.append_permissions("T1", "U1", &cmds(&["meme"]));

        let outcome = doc.remove_permissions("T1", "U1", &cmds(&["meme"]));
        assert_eq!(outcome, RevokeOutcome::Removed);
        assert!(doc.user("T1", "U1").is_none());
        assert!(doc.thread("T1").is_none());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_remove_keeps_other_users() {
        let mut doc = SettingsDocument::new();
        doc.append_permissions("T1", "U1", &cmds(&["meme"]));
        doc.append_permissions("T1", "U2", &cmds(&["quote"]));

        doc.remove_permissions("T1", "U1", &cmds(&["meme"]));
        assert!(doc.user("T1", "U1").is_none());
        assert!(doc.user("T1", "U2").is_some());
        assert!(doc.thread("T1").is_some());
    }

    #[test]
    fn test_remove_missing_records() {
        let mut doc = SettingsDocument::new();
        assert_eq!(
            doc.remove_permissions("T1", "U1", &cmds(&["meme"])),
            RevokeOutcome::NotFound
        );

        doc.append_permissions("T1", "U1", &cmds(&["meme"]));
        assert_eq!(
            doc.remove_permissions("T1", "U2", &cmds(&["meme"])),
            RevokeOutcome::NotFound
        );
    }

    #[test]
    fn test_remove_unheld_command_leaves_rest() {
        let mut doc = SettingsDocument::new();
        doc.append_permissions("T1", "U1", &cmds(&["meme", "quote"]));

        let outcome = doc.remove_permissions("T1", "U1", &cmds(&["ban"]));
        assert_eq!(outcome, RevokeOutcome::Removed);
        assert_eq!(
            doc.user("T1", "U1").unwrap().permissions,
            cmds(&["meme", "quote"])
        );
    }

    #[test]
    fn test_json_shape() {
        let mut doc = SettingsDocument::new();
        doc.append_permissions("T1", "U1", &cmds(&["meme"]));

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"T1": {"users": {"U1": {"permissions": ["meme"]}}}})
        );

        let empty = SettingsDocument::new();
        assert_eq!(serde_json::to_value(&empty).unwrap(), serde_json::json!({}));
    }
}
