//! Visitor-Counter Service - Persistence demo
//!
//! Every visit to `/` reads an integer from a flat file, increments it,
//! writes it back, and renders the new value. The file lives on a mounted
//! volume, so the count survives process (and pod) restarts - that
//! survival is the whole point of the demo.
//!
//! # Usage
//!
//! ```bash
//! COUNTER_FILE=/data/counter.txt cargo run --bin visitor-counter
//! ```

use std::net::SocketAddr;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use demo_counter::app;
use demo_counter::config::Config;
use demo_counter::routes::AppState;
use demo_counter::store::CounterStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env();

    // Setup logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("Starting visitor-counter service v{}", env!("CARGO_PKG_VERSION"));
    info!("Counter file: {}", config.counter_file.display());

    // Seed the counter file before accepting traffic
    let store = CounterStore::new(config.counter_file.clone());
    store.init().await?;
    info!("Current count: {}", store.load().await);

    // Create app state
    let state = AppState {
        store,
        instance: config.instance.clone(),
    };

    // Start server
    let addr: SocketAddr = config.server_addr().parse()?;
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
