//! Webserver library for the spellbook HTTP service
//!
//! Exposes the artifact generators over JSON endpoints, with per-request
//! cancellation tied to client disconnects and server shutdown.

pub mod config;
pub mod error;
pub mod state;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::{AppConfig, Args};
pub use error::{ApiError, WebServerError, WebServerResult};
pub use state::AppState;
pub use webserver_impl::WebServer;
