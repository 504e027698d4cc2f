//! Upstream provider implementations

pub mod completion_client;
pub mod model_directory;

#[cfg(test)]
pub mod tests;

pub use completion_client::*;
pub use model_directory::*;
