//! STAC Auth Mock Server
//!
//! Usage:
//!   cargo run
//!
//! Environment (also read from `.env`):
//!   PORT                - Server port (default: 3000)
//!   HOST                - Bind address (default: 0.0.0.0)
//!   PUBLIC_URL          - Base URL used in links (default: http://localhost:$PORT)
//!   AUTH_METHOD         - none | basic | apikey (default: basic)
//!   BASIC_AUTH_USERNAME - default: testuser
//!   BASIC_AUTH_PASSWORD - default: testpass
//!   API_KEY             - default: test-api-key-12345
//!   RUST_LOG            - Log filter (default: info)

use stac_auth_mock::{create_router, AppState, ServerConfig};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = ServerConfig::from_env()?;
    let bind_addr = config.bind_addr();
    let summary = config.summary_lines();

    let app = create_router(Arc::new(AppState::new(config)));
    let listener = TcpListener::bind(&bind_addr).await?;

    for line in &summary {
        info!("{}", line);
    }
    info!("Listening on {}", bind_addr);
    info!("Press Ctrl+C for graceful shutdown");

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("STAC API server shutdown complete");
    Ok(())
}
