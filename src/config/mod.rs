//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, semantic checks)
//!     → ServerConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no hot reload
//! - All fields have defaults, so no config file means defaults
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{ConnectionConfig, ListenerConfig, ServerConfig, ShutdownConfig};
