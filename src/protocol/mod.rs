//! Wire protocol subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound TCP bytes
//!     → buffered line framing (net/connection.rs)
//!     → command.rs (one line in, one reply out)
//!     → response bytes written back on the same connection
//! ```
//!
//! # Design Decisions
//! - Raw newline-terminated text; no length prefix, no encoding negotiation
//! - Command interpretation is a pure function, testable without sockets
//! - First matching prefix wins; anything else is echoed back

pub mod command;

pub use command::{interpret, Reply};
