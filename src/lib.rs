pub mod core;
pub mod store;
pub mod platform;
pub mod commands;

// Event listener seam for embedding applications
pub mod events;

// Session-cookie artifact produced by the login helper
pub mod auth;

// Optional components
pub mod config;
pub mod logging;
