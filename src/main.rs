use qr_relay::{config, routes, ServiceState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    config::tracing::init();
    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let mut config = config::ServiceConfig::default();
    config
        .init_from_env()
        .map_err(|e| format!("Failed to load configuration: {}", e))?;
    let addr = config
        .server
        .get_socket_addr()
        .map_err(|e| format!("Invalid server address '{}': {}", config.server.get_addr(), e))?;

    let state = Arc::new(ServiceState::new(config)?);
    info!(
        "Relaying QR requests to {}.",
        state.config.generator.get_endpoint()?
    );

    let app = routes::create_router(state);
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;
    info!("Listening on {}.", addr);
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server error: {}", e))
}
