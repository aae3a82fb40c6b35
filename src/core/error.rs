//! Bot error types

use thiserror::Error;

/// Errors that can occur in the bot command layer
#[derive(Error, Debug)]
pub enum BotError {
    /// IO error on a bot artifact (settings file, cookie file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Messaging platform call failed
    #[error("Platform error: {0}")]
    Platform(String),

    /// No command in the registry matched
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl BotError {
    /// Create a platform error from a string
    pub fn platform(msg: impl Into<String>) -> Self {
        BotError::Platform(msg.into())
    }

    /// Create a generic error from a string
    pub fn other(msg: impl Into<String>) -> Self {
        BotError::Other(msg.into())
    }
}

/// Result type alias for bot operations
pub type BotResult<T> = Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BotError::UnknownCommand("meme".into());
        assert_eq!(err.to_string(), "Unknown command: meme");

        let err = BotError::platform("thread lookup failed");
        assert_eq!(err.to_string(), "Platform error: thread lookup failed");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let bot_err: BotError = io_err.into();
        assert!(matches!(bot_err, BotError::Io(_)));
    }
}
