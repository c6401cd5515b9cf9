//! Command interpretation for inbound lines.

use chrono::Local;

/// Welcome line sent to every client on connect.
pub const WELCOME: &str = "Welcome to the lined TCP server!\n";

/// Fixed help text listing the three commands.
pub const HELP: &str = "/help - Show this help\n/time - Get server time\n/quit - Disconnect\n";

/// Response to a single inbound line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to write back to the peer, newline-terminated.
    pub text: String,
    /// Whether the connection should be closed after the reply is sent.
    pub close_after: bool,
}

impl Reply {
    fn keep_open(text: String) -> Self {
        Self {
            text,
            close_after: false,
        }
    }
}

/// Map one inbound line to its reply. First matching prefix wins; a line
/// matching no command is echoed back.
pub fn interpret(line: &str) -> Reply {
    if line.starts_with("/quit") {
        Reply {
            text: "Goodbye!\n".to_string(),
            close_after: true,
        }
    } else if line.starts_with("/time") {
        let now = Local::now();
        Reply::keep_open(format!(
            "Server time: {}\n",
            now.format("%a %b %e %H:%M:%S %Y")
        ))
    } else if line.starts_with("/help") {
        Reply::keep_open(HELP.to_string())
    } else {
        Reply::keep_open(format!("Echo: {}\n", line))
    }
}
