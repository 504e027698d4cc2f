//! Webserver state shared by all handlers

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

/// Router state: the generator capability and the server shutdown token
pub struct AppState<G> {
    pub generator: Arc<G>,
    /// Parent of every per-request token
    pub shutdown: CancellationToken,
}

impl<G> AppState<G> {
    pub fn new(generator: Arc<G>, shutdown: CancellationToken) -> Self {
        Self { generator, shutdown }
    }
}

// Manual impl: `G` itself need not be `Clone`
impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            shutdown: self.shutdown.clone(),
        }
    }
}
