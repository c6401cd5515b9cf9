//! Configuration loading from disk.

use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ServerConfig, ConfigError> {
    let config: ServerConfig = toml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

/// Semantic checks that serde cannot express.
fn validate_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config
        .listener
        .bind_address
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::Invalid(format!("listener.bind_address: {}", e)))?;

    if config.connection.read_buffer_bytes == 0 {
        return Err(ConfigError::Invalid(
            "connection.read_buffer_bytes must be non-zero".to_string(),
        ));
    }

    Ok(())
}
