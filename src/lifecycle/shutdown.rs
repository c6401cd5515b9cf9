//! Shutdown coordination for the server.

use tokio_util::sync::CancellationToken;

/// Coordinator for graceful shutdown.
///
/// Wraps a cancellation token that the accept loop and every connection
/// worker receive a clone of at spawn time. Triggering is a one-way
/// transition: once cancelled, the token stays cancelled for the life of
/// the process.
#[derive(Debug, Clone, Default)]
pub struct Shutdown {
    token: CancellationToken,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Trigger the shutdown signal. Idempotent: calling this more than once
    /// has no further effect.
    pub fn trigger(&self) {
        self.token.cancel();
    }

    /// Non-blocking check of the shutdown state. Cheap enough for workers
    /// to call between messages.
    pub fn is_triggered(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolve once the shutdown signal has been triggered.
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }
}
