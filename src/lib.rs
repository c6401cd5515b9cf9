//! Line-oriented TCP command server library.

pub mod config;
pub mod lifecycle;
pub mod net;
pub mod protocol;
pub mod server;

pub use config::ServerConfig;
pub use lifecycle::Shutdown;
pub use server::Server;
