//! TCP listener implementation.
//!
//! # Responsibilities
//! - Bind to the configured address
//! - Accept incoming TCP connections
//! - Report bind failures as fatal, accept failures as transient

use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug)]
pub enum ListenerError {
    /// Failed to bind to address. Fatal at startup.
    Bind(std::io::Error),
    /// Failed to accept a connection. Transient while running.
    Accept(std::io::Error),
}

impl std::fmt::Display for ListenerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenerError::Bind(e) => write!(f, "Failed to bind: {}", e),
            ListenerError::Accept(e) => write!(f, "Failed to accept: {}", e),
        }
    }
}

impl std::error::Error for ListenerError {}

/// The listening socket.
///
/// Owns the bound socket exclusively; dropping the value closes it, which
/// is what makes new connection attempts fail once shutdown has stopped
/// the accept loop.
pub struct Listener {
    inner: TcpListener,
    local_addr: SocketAddr,
}

impl Listener {
    /// Bind to the configured address.
    pub async fn bind(config: &ListenerConfig) -> Result<Self, ListenerError> {
        let addr: SocketAddr = config.bind_address.parse().map_err(|e| {
            ListenerError::Bind(std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
        })?;

        let listener = TcpListener::bind(addr).await.map_err(ListenerError::Bind)?;
        let local_addr = listener.local_addr().map_err(ListenerError::Bind)?;

        tracing::info!(address = %local_addr, "Listener bound");

        Ok(Self {
            inner: listener,
            local_addr,
        })
    }

    /// Accept a new connection.
    pub async fn accept(&self) -> Result<(TcpStream, SocketAddr), ListenerError> {
        self.inner.accept().await.map_err(ListenerError::Accept)
    }

    /// The local address this listener is bound to. Reflects the actual
    /// port when the configured one was 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_ephemeral_port_reports_actual_address() {
        let config = ListenerConfig {
            bind_address: "127.0.0.1:0".to_string(),
            ..Default::default()
        };
        let listener = Listener::bind(&config).await.unwrap();
        assert_ne!(listener.local_addr().port(), 0);
    }

    #[tokio::test]
    async fn bind_invalid_address_fails() {
        let config = ListenerConfig {
            bind_address: "not-an-address".to_string(),
            ..Default::default()
        };
        let result = Listener::bind(&config).await;
        assert!(matches!(result, Err(ListenerError::Bind(_))));
    }

    #[tokio::test]
    async fn dropping_the_listener_refuses_new_connections() {
        let config = ListenerConfig {
            bind_address: "127.0.0.1:0".to_string(),
            ..Default::default()
        };
        let listener = Listener::bind(&config).await.unwrap();
        let addr = listener.local_addr();
        drop(listener);

        let result = TcpStream::connect(addr).await;
        assert!(result.is_err());
    }
}
