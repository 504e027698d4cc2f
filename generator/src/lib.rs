//! Generator library for structured learning artifacts
//!
//! Turns a roadmap, topics, key-results, educational-roadmap or trail request
//! into a validated artifact by prompting a text model, falling back across
//! candidate models until one produces a structurally sound answer.

pub mod config;
pub mod core;
pub mod error;
pub mod generator_impl;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use config::{DEFAULT_BASE_URL, DEFAULT_FALLBACK_MODELS, GenerationConfig, ProviderEndpoint};
pub use error::{GenerationError, GenerationResult};
pub use generator_impl::{Generator, LiveGenerator};
pub use services::*;
pub use traits::*;
pub use types::*;
