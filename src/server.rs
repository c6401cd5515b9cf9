//! Accept loop and server orchestration.
//!
//! # Responsibilities
//! - Accept connections and spawn a worker per connection into the registry
//! - Run a registry cleanup pass after each registration
//! - Stop accepting when shutdown triggers, then drain the registry
//!
//! # Design Decisions
//! - The select races accept against the shutdown token, so no pending
//!   accept survives shutdown and a closed-listener accept error never
//!   needs to be told apart from a real one
//! - Accept failures while running are transient: log, pause briefly,
//!   continue
//! - Dropping the listener before the drain means new connection attempts
//!   are refused while in-flight connections finish

use std::time::Duration;

use crate::config::ServerConfig;
use crate::lifecycle::Shutdown;
use crate::net::{ConnectionWorker, Listener, WorkerRegistry};

/// The server: owns the worker registry and the accept loop.
pub struct Server {
    config: ServerConfig,
    registry: WorkerRegistry,
}

impl Server {
    /// Create a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            registry: WorkerRegistry::new(),
        }
    }

    /// Run the accept loop until shutdown triggers, then drain workers.
    ///
    /// Consumes the listener; it is dropped (closing the listening socket)
    /// as soon as the loop exits.
    pub async fn run(self, listener: Listener, shutdown: Shutdown) {
        loop {
            tokio::select! {
                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, peer)) => {
                            if self.config.listener.nodelay {
                                if let Err(e) = stream.set_nodelay(true) {
                                    tracing::warn!(peer = %peer, error = %e, "Failed to set TCP_NODELAY");
                                }
                            }

                            let worker = ConnectionWorker::new(
                                stream,
                                peer,
                                shutdown.clone(),
                                &self.config.connection,
                            );
                            let id = worker.id();
                            self.registry.spawn(worker.run()).await;
                            let reaped = self.registry.cleanup().await;
                            let active = self.registry.active().await;

                            tracing::info!(
                                connection_id = %id,
                                peer = %peer,
                                active,
                                reaped,
                                "Connection accepted"
                            );
                        }
                        Err(e) => {
                            if shutdown.is_triggered() {
                                break;
                            }
                            tracing::warn!(error = %e, "Failed to accept connection");
                            // Pause to avoid spinning on repeated errors.
                            tokio::time::sleep(Duration::from_millis(100)).await;
                        }
                    }
                }

                _ = shutdown.cancelled() => {
                    tracing::info!("Shutdown signal observed, no longer accepting");
                    break;
                }
            }
        }

        // Refuse new connections while in-flight workers drain.
        drop(listener);

        let grace = Duration::from_secs(self.config.shutdown.grace_period_secs);
        self.registry.drain(grace).await;
        tracing::info!("All workers drained");
    }
}
