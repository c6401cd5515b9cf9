//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Bind listener → Spawn signal listener → Run accept loop
//!
//! Shutdown (shutdown.rs):
//!     Token cancelled → Stop accepting → Drain workers → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Shutdown is a one-way transition: the token is never un-cancelled
//! - The token is handed explicitly to the accept loop and to every worker
//!   at spawn time, not read through a global
//! - Draining has a bounded grace period: stragglers are force-closed

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
