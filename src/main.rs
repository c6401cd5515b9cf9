//! lined — a line-oriented TCP command server.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                   SERVER                     │
//!                    │                                              │
//!   Client connects  │  ┌──────────┐   ┌──────────┐   ┌──────────┐ │
//!   ─────────────────┼─▶│   net    │──▶│   net    │──▶│ protocol │ │
//!                    │  │ listener │   │connection│   │ command  │ │
//!                    │  └──────────┘   └────┬─────┘   └──────────┘ │
//!                    │                      │                      │
//!                    │                      ▼                      │
//!                    │               ┌──────────────┐              │
//!                    │               │ net registry │              │
//!                    │               └──────────────┘              │
//!                    │                                              │
//!                    │  ┌────────────────────────────────────────┐ │
//!                    │  │          Cross-Cutting Concerns        │ │
//!                    │  │  ┌─────────┐  ┌───────────────────┐    │ │
//!                    │  │  │ config  │  │     lifecycle     │    │ │
//!                    │  │  │         │  │ shutdown/signals  │    │ │
//!                    │  │  └─────────┘  └───────────────────┘    │ │
//!                    │  └────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lined::config::{self, ServerConfig};
use lined::lifecycle::{signals, Shutdown};
use lined::net::Listener;
use lined::server::Server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lined=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("lined v0.1.0 starting");

    // Load configuration; defaults unless LINED_CONFIG points at a file.
    let config = match std::env::var_os("LINED_CONFIG") {
        Some(path) => config::load_config(Path::new(&path))?,
        None => ServerConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        read_buffer_bytes = config.connection.read_buffer_bytes,
        grace_period_secs = config.shutdown.grace_period_secs,
        "Configuration loaded"
    );

    // Bind the listener; failure here is fatal.
    let listener = Listener::bind(&config.listener).await?;

    tracing::info!(
        address = %listener.local_addr(),
        "Listening for connections"
    );

    // Wire SIGINT/SIGTERM to the shutdown coordinator.
    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    // Run until a signal stops the accept loop and workers have drained.
    let server = Server::new(config);
    server.run(listener, shutdown).await;

    tracing::info!("Shutdown complete");
    Ok(())
}
