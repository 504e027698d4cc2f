//! Main webserver implementation
//!
//! Routes every artifact kind to the injected [`ArtifactGenerator`] and serves
//! until the shutdown token fires.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use generator::ArtifactGenerator;
use shared::{Component, logging, service_info};

use crate::error::{WebServerError, WebServerResult};
use crate::state::AppState;
use crate::web::handlers::api;

/// Main webserver struct with dependency injection
pub struct WebServer<G>
where
    G: ArtifactGenerator + 'static,
{
    state: AppState<G>,
}

impl<G> WebServer<G>
where
    G: ArtifactGenerator + 'static,
{
    pub fn new(generator: G, shutdown: CancellationToken) -> Self {
        Self {
            state: AppState::new(Arc::new(generator), shutdown),
        }
    }

    /// Token that stops the server and cancels in-flight generations
    pub fn shutdown_token(&self) -> CancellationToken {
        self.state.shutdown.clone()
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        let artifacts = Router::new()
            .route("/roadmap", post(api::generate_roadmap::<G>))
            .route("/topics", post(api::generate_topics::<G>))
            .route("/key-results", post(api::generate_key_results::<G>))
            .route("/educational-roadmap", post(api::generate_educational_roadmap::<G>))
            .route("/educational-trail", post(api::generate_educational_trail::<G>));

        Router::new()
            .route("/health", get(api::health))
            .nest("/api/v1", artifacts.clone())
            // unprefixed paths kept for older clients
            .merge(artifacts)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.state.clone())
    }

    /// Serve on `addr` until the shutdown token is cancelled
    pub async fn run(&self, addr: SocketAddr) -> WebServerResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {addr}: {e}")))?;

        logging::log_startup(Component::WebServer, &format!("listening on http://{addr}"));

        let shutdown = self.state.shutdown.clone();
        axum::serve(listener, router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Server error: {e}")))?;

        service_info!(Component::WebServer, "HTTP server stopped");
        Ok(())
    }
}
