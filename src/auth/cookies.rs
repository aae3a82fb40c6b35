//! Session cookie file helpers

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::BotResult;

/// One browser session cookie as written by the login helper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCookie {
    /// Cookie name
    pub key: String,
    /// Cookie value
    pub value: String,
    /// Domain the cookie applies to
    pub domain: String,
    /// Path the cookie applies to
    pub path: String,
    /// Expiry timestamp, absent for session cookies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
    #[serde(default)]
    pub http_only: bool,
    #[serde(default)]
    pub secure: bool,
}

impl SessionCookie {
    /// Create a cookie for a domain with defaults for the remaining fields
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            domain: domain.into(),
            path: "/".to_string(),
            expires: None,
            http_only: false,
            secure: false,
        }
    }

    /// Set the expiry timestamp
    pub fn with_expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Whether the cookie is expired at the given instant
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires {
            Some(expires) => expires <= now,
            None => false,
        }
    }
}

/// The session-cookie file the login helper produces
#[derive(Debug, Clone)]
pub struct CookieFile {
    path: PathBuf,
}

impl CookieFile {
    /// Create a handle for the given cookie file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the cookies, treating a missing file as no session
    pub fn load(&self) -> BotResult<Vec<SessionCookie>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrite the file with the given cookies
    pub fn save(&self, cookies: &[SessionCookie]) -> BotResult<()> {
        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, cookies)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn create_file() -> (CookieFile, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let file = CookieFile::new(temp_dir.path().join("appstate.json"));
        (file, temp_dir)
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (file, _temp) = create_file();
        assert!(!file.exists());
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (file, _temp) = create_file();

        let expires = Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
        let cookies = vec![
            SessionCookie::new("sid", "abc123", ".example.com").with_expires(expires),
            SessionCookie::new("token", "xyz", ".example.com"),
        ];

        file.save(&cookies).unwrap();
        let loaded = file.load().unwrap();
        assert_eq!(loaded, cookies);
    }

    #[test]
    fn test_camel_case_field_names() {
        let (file, _temp) = create_file();

        let mut cookie = SessionCookie::new("sid", "abc", ".example.com");
        cookie.http_only = true;
        file.save(&[cookie]).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("\"httpOnly\": true"));
        assert!(!content.contains("http_only"));
    }

    #[test]
    fn test_expiry() {
        let expires = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let cookie = SessionCookie::new("sid", "abc", ".example.com").with_expires(expires);

        let before = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap();
        assert!(!cookie.is_expired(before));
        assert!(cookie.is_expired(after));

        let session_cookie = SessionCookie::new("sid", "abc", ".example.com");
        assert!(!session_cookie.is_expired(after));
    }
}
