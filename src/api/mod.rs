//! HTTP API module for the health endpoint and interface serving.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::utils::shutdown_signal;

/// Bind all interfaces on the configured port and serve until interrupted.
pub async fn serve(config: &Config) -> crate::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let router = create_router(config);

    let listener = TcpListener::bind(addr).await?;
    info!("Engaging uplink on http://localhost:{}", config.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
