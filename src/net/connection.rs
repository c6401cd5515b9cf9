//! Per-connection worker and lifecycle tracking.
//!
//! # Responsibilities
//! - Generate unique connection IDs for tracing
//! - Send the welcome line, then drive the read loop for one connection
//! - Observe shutdown cooperatively between messages
//! - Log the disconnect reason on every exit path

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::config::ConnectionConfig;
use crate::lifecycle::Shutdown;
use crate::protocol::command;

/// Global atomic counter for connection IDs.
/// Relaxed ordering is sufficient: we only need uniqueness.
static CONNECTION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Generate a new unique connection ID.
    pub fn new() -> Self {
        Self(CONNECTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Why a worker exited its read loop.
#[derive(Debug)]
enum Disconnect {
    /// Peer closed the connection (EOF).
    PeerClosed,
    /// A read or write on the connection failed.
    Io(std::io::Error),
    /// The peer asked to disconnect via /quit.
    QuitCommand,
    /// The server is shutting down.
    Shutdown,
}

impl std::fmt::Display for Disconnect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Disconnect::PeerClosed => write!(f, "peer closed"),
            Disconnect::Io(e) => write!(f, "I/O error: {}", e),
            Disconnect::QuitCommand => write!(f, "quit command"),
            Disconnect::Shutdown => write!(f, "server shutdown"),
        }
    }
}

/// Drives one accepted connection: welcome line, then a read loop invoking
/// the command interpreter per line until EOF, error, /quit, or shutdown.
///
/// The worker owns its stream exclusively; the socket is released on every
/// exit path when the halves are dropped.
pub struct ConnectionWorker {
    stream: TcpStream,
    peer: SocketAddr,
    id: ConnectionId,
    shutdown: Shutdown,
    read_buffer_bytes: usize,
}

impl ConnectionWorker {
    /// Create a worker for an accepted stream.
    pub fn new(
        stream: TcpStream,
        peer: SocketAddr,
        shutdown: Shutdown,
        config: &ConnectionConfig,
    ) -> Self {
        Self {
            stream,
            peer,
            id: ConnectionId::new(),
            shutdown,
            read_buffer_bytes: config.read_buffer_bytes,
        }
    }

    /// This connection's ID.
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Run the session to completion.
    pub async fn run(self) {
        let Self {
            stream,
            peer,
            id,
            shutdown,
            read_buffer_bytes,
        } = self;

        let (read_half, mut write_half) = stream.into_split();

        if let Err(e) = write_half.write_all(command::WELCOME.as_bytes()).await {
            tracing::warn!(connection_id = %id, peer = %peer, error = %e, "Failed to send welcome");
            return;
        }

        let mut lines = BufReader::with_capacity(read_buffer_bytes, read_half).lines();

        let reason = loop {
            // Shutdown is observed between messages: an in-flight read may
            // still complete one more exchange after the signal, and the
            // registry's grace-period drain bounds how long that can take.
            if shutdown.is_triggered() {
                break Disconnect::Shutdown;
            }

            match lines.next_line().await {
                Ok(Some(line)) => {
                    tracing::debug!(connection_id = %id, peer = %peer, message = %line, "Received line");

                    let reply = command::interpret(&line);
                    if let Err(e) = write_half.write_all(reply.text.as_bytes()).await {
                        break Disconnect::Io(e);
                    }
                    if reply.close_after {
                        break Disconnect::QuitCommand;
                    }
                }
                Ok(None) => break Disconnect::PeerClosed,
                Err(e) => break Disconnect::Io(e),
            }
        };

        match &reason {
            Disconnect::Io(_) => {
                tracing::warn!(connection_id = %id, peer = %peer, reason = %reason, "Connection closed")
            }
            _ => {
                tracing::info!(connection_id = %id, peer = %peer, reason = %reason, "Connection closed")
            }
        }
    }
}
