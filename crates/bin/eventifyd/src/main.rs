//! # eventifyd — eventify daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (`eventify.toml` + environment overrides)
//! - Initialize `tracing` with the configured filter
//! - Construct the remote event source (adapter)
//! - Construct application services, injecting the source via port traits
//! - Pre-render event detail pages
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use eventify_adapter_http_axum::router;
use eventify_adapter_http_axum::state::AppState;
use eventify_app::ports::SystemClock;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Event source
    let source = config.source.clone().build()?;
    tracing::info!(base_url = %config.source.base_url, "using remote event source");

    // Services
    let state = AppState::new(source, SystemClock);
    if config.pages.prerender {
        if let Err(err) = state.pages.prerender().await {
            tracing::warn!(error = %err, "pre-rendering failed, pages will render on demand");
        }
    }

    // HTTP
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "eventifyd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("eventifyd stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "cannot listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
}
