//! spellbook binary entry point

use std::net::SocketAddr;

use generator::{GenerationConfig, LiveGenerator};
use shared::{Component, logging, service_info};
use tokio::signal;
use tokio_util::sync::CancellationToken;

use webserver::{AppConfig, WebServer, WebServerResult};

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let config = AppConfig::load()?;

    logging::init_tracing_with_level(Component::WebServer, Some(&config.log_level))?;

    service_info!(
        Component::WebServer,
        port = config.port,
        base_url = %config.endpoint.base_url,
        "Starting spellbook"
    );

    let generator = LiveGenerator::live(config.endpoint.clone(), GenerationConfig::default());
    let shutdown = CancellationToken::new();
    let webserver = WebServer::new(generator, shutdown.clone());

    // Set up graceful shutdown
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                logging::log_shutdown(Component::WebServer, "Received Ctrl+C signal");
                shutdown.cancel();
            }
            Err(err) => {
                logging::log_error(Component::WebServer, "Signal handling", &err);
            }
        }
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    webserver.run(addr).await?;

    logging::log_success(Component::WebServer, "WebServer stopped gracefully");
    Ok(())
}
