//! Bot configuration
//!
//! Paths of the persisted artifacts and the command prefix the dispatcher
//! strips from inbound messages.

use std::path::PathBuf;

/// Configuration for the bot command layer
///
/// Use the builder pattern:
///
/// ```ignore
/// let config = BotConfig::new()
///     .with_settings_path("data/appsettings.json")
///     .with_command_prefix("!");
/// ```
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Path of the permission settings file
    pub settings_path: PathBuf,

    /// Path of the session-cookie file the login helper produces
    pub cookie_path: PathBuf,

    /// Prefix marking a message as a command
    pub command_prefix: String,
}

impl BotConfig {
    /// Create a configuration with the default paths and prefix
    pub fn new() -> Self {
        Self {
            settings_path: PathBuf::from("appsettings.json"),
            cookie_path: PathBuf::from("appstate.json"),
            command_prefix: "/".to_string(),
        }
    }

    /// Set the settings file path
    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = path.into();
        self
    }

    /// Set the cookie file path
    pub fn with_cookie_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cookie_path = path.into();
        self
    }

    /// Set the command prefix
    pub fn with_command_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.command_prefix = prefix.into();
        self
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = BotConfig::default();
        assert_eq!(config.settings_path, PathBuf::from("appsettings.json"));
        assert_eq!(config.cookie_path, PathBuf::from("appstate.json"));
        assert_eq!(config.command_prefix, "/");
    }

    #[test]
    fn test_config_builder() {
        let config = BotConfig::new()
            .with_settings_path("data/settings.json")
            .with_command_prefix("!");
        assert_eq!(config.settings_path, PathBuf::from("data/settings.json"));
        assert_eq!(config.command_prefix, "!");
    }
}
