//! Event listener seam
//!
//! This module provides:
//! - `EventListener` trait - one required method, implemented by every
//!   concrete handler
//! - `PlatformEvent` - the events the platform listener emits
//! - `EventRegistry` - stores listeners and dispatches events to them
//! - `CommandListener` - the built-in listener that routes messages into the
//!   command dispatcher

mod listener;

pub use listener::{CommandListener, EventListener, EventRegistry, PlatformEvent};
