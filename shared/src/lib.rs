//! Shared types for the Spellbook generation service
//!
//! Contains the plain data contracts exchanged with callers (request bodies
//! and the five artifact shapes), the request-level error type and the
//! logging setup used by every binary in the workspace.

pub mod artifacts;
pub mod errors;
pub mod logging;
pub mod requests;
pub mod types;

pub use artifacts::*;
pub use errors::*;
pub use requests::*;
pub use types::*;
