//! Worker registry: tracking for connection worker tasks.
//!
//! # Responsibilities
//! - Track every spawned worker under a lock
//! - Reap finished workers after each registration (no background sweep)
//! - Drain with a bounded grace period on shutdown, aborting stragglers
//!
//! # Design Decisions
//! - Aborting a worker drops its stream, force-closing the connection, so
//!   shutdown latency is bounded by the grace period
//! - The lock is only held for registry mutation and joining, never across
//!   a socket operation

use std::future::Future;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinSet;

/// Tracks active connection worker tasks.
#[derive(Debug, Default)]
pub struct WorkerRegistry {
    tasks: Mutex<JoinSet<()>>,
}

impl WorkerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(JoinSet::new()),
        }
    }

    /// Spawn a worker and track it.
    pub async fn spawn<F>(&self, worker: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.lock().await.spawn(worker);
    }

    /// Reap every worker whose task has finished. Returns how many were
    /// removed.
    pub async fn cleanup(&self) -> usize {
        let mut tasks = self.tasks.lock().await;
        let mut reaped = 0;
        while tasks.try_join_next().is_some() {
            reaped += 1;
        }
        reaped
    }

    /// Number of tracked workers, including finished ones not yet reaped.
    pub async fn active(&self) -> usize {
        self.tasks.lock().await.len()
    }

    /// Wait up to `grace` for all workers to finish, then abort whatever is
    /// still running.
    pub async fn drain(&self, grace: Duration) {
        let mut tasks = self.tasks.lock().await;
        let deadline = tokio::time::Instant::now() + grace;

        loop {
            match tokio::time::timeout_at(deadline, tasks.join_next()).await {
                // A worker finished within the grace period.
                Ok(Some(_)) => continue,
                // All workers finished.
                Ok(None) => return,
                // Grace period expired.
                Err(_) => break,
            }
        }

        let remaining = tasks.len();
        tracing::warn!(remaining, "Grace period expired, aborting remaining workers");
        tasks.shutdown().await;
    }
}
