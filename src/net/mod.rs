//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (bind, accept)
//!     → connection.rs (per-connection worker, read loop)
//!     → registry.rs (worker tracking, reaping, shutdown drain)
//! ```
//!
//! # Design Decisions
//! - Socket ownership is exclusive: the listener owns the listening socket,
//!   each accepted stream moves into exactly one worker and is never shared
//! - Connection failures are local: one worker's I/O error never affects
//!   the listener or other workers
//! - The registry lock is never held across a socket operation

pub mod connection;
pub mod listener;
pub mod registry;

pub use connection::{ConnectionId, ConnectionWorker};
pub use listener::Listener;
pub use registry::WorkerRegistry;
