//! Session-cookie artifact
//!
//! The login helper signs in through a real browser and writes the session
//! cookies to a JSON file; the bot loads that file at startup to
//! authenticate its platform client. This module owns the file format and
//! its load/save round trip. The login flow itself lives outside this crate.

mod cookies;

pub use cookies::{CookieFile, SessionCookie};
