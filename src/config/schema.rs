//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address, socket options).
    pub listener: ListenerConfig,

    /// Per-connection settings.
    pub connection: ConnectionConfig,

    /// Shutdown behavior.
    pub shutdown: ShutdownConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:54000").
    pub bind_address: String,

    /// Whether to set TCP_NODELAY on accepted connections.
    pub nodelay: bool,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:54000".to_string(),
            nodelay: true,
        }
    }
}

/// Per-connection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Read buffer capacity in bytes.
    pub read_buffer_bytes: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            read_buffer_bytes: 4096,
        }
    }
}

/// Shutdown behavior.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// How long to wait for in-flight connections to finish before
    /// force-closing them.
    pub grace_period_secs: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            grace_period_secs: 5,
        }
    }
}
