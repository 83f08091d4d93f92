mod config;
mod errors;
mod portfolio;
mod render;
mod routes;
mod state;
mod theme;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    let portfolio = portfolio::store::load_embedded()?;

    if config.static_dir.is_dir() {
        info!("Serving static assets from {}", config.static_dir.display());
    } else {
        warn!(
            "Static directory {} does not exist; images and documents will 404",
            config.static_dir.display()
        );
    }

    let addr = SocketAddr::new(config.host, config.port);
    let state = AppState::new(portfolio, config);

    let app = build_router(state).layer(TraceLayer::new_for_http());

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
