//! Command registry
//!
//! Holds every registered command, enumerates their access metadata, and
//! matches inbound text to a command by regex.

use std::sync::Arc;

use regex::Regex;

use super::command::{Command, CommandInfo};

/// A command together with its compiled pattern
struct RegisteredCommand {
    pattern: Regex,
    command: Arc<dyn Command>,
}

/// A successful match of inbound text against a registered command
pub struct CommandMatch {
    /// The matched command
    pub command: Arc<dyn Command>,
    /// Capture groups, in pattern order (empty string for unmatched groups)
    pub args: Vec<String>,
}

/// Registry that holds all available commands
///
/// Commands are tried in registration order when matching inbound text.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<RegisteredCommand>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command
    ///
    /// Compiles the command's pattern, anchored to the start of the text.
    pub fn register<C: Command + 'static>(&mut self, command: C) -> Result<(), regex::Error> {
        let pattern = Regex::new(&format!("^{}", command.pattern()))?;
        tracing::info!("Registering command: {}", command.name());
        self.commands.push(RegisteredCommand {
            pattern,
            command: Arc::new(command),
        });
        Ok(())
    }

    /// Get a command by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands
            .iter()
            .find(|r| r.command.name() == name)
            .map(|r| r.command.clone())
    }

    /// Enumerate `{name, admin_only}` for every registered command
    pub fn command_infos(&self) -> Vec<CommandInfo> {
        self.commands
            .iter()
            .map(|r| CommandInfo {
                name: r.command.name().to_string(),
                admin_only: r.command.admin_only(),
            })
            .collect()
    }

    /// Get the list of command names
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.iter().map(|r| r.command.name()).collect()
    }

    /// Match inbound text against the registered patterns
    ///
    /// Returns the first command whose pattern matches, with its captures.
    pub fn find_match(&self, text: &str) -> Option<CommandMatch> {
        for registered in &self.commands {
            if let Some(captures) = registered.pattern.captures(text) {
                let args = captures
                    .iter()
                    .skip(1)
                    .map(|c| c.map(|m| m.as_str().to_string()).unwrap_or_default())
                    .collect();
                return Some(CommandMatch {
                    command: registered.command.clone(),
                    args,
                });
            }
        }
        None
    }

    /// Get the number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.command_names())
            .finish()
    }
}
