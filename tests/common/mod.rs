//! Shared utilities for integration testing.

// Each test binary compiles this module separately and uses a subset of it.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

use lined::config::ServerConfig;
use lined::net::Listener;
use lined::{Server, Shutdown};

/// A server running on an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<()>,
}

/// Start a server with the given config, rebound to 127.0.0.1:0.
pub async fn start_server(mut config: ServerConfig) -> TestServer {
    config.listener.bind_address = "127.0.0.1:0".to_string();

    let listener = Listener::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr();

    let shutdown = Shutdown::new();
    let server = Server::new(config);
    let server_shutdown = shutdown.clone();
    let handle = tokio::spawn(async move {
        server.run(listener, server_shutdown).await;
    });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// A client that reads whole lines and writes raw text.
pub struct TestClient {
    lines: Lines<BufReader<OwnedReadHalf>>,
    writer: OwnedWriteHalf,
}

impl TestClient {
    /// Connect and consume the welcome line.
    pub async fn connect(addr: SocketAddr) -> Self {
        let mut client = Self::connect_raw(addr).await;
        let welcome = client.recv_line().await.expect("welcome line");
        assert!(welcome.starts_with("Welcome"));
        client
    }

    /// Connect without consuming anything.
    pub async fn connect_raw(addr: SocketAddr) -> Self {
        let stream = TcpStream::connect(addr).await.unwrap();
        let (read_half, writer) = stream.into_split();
        Self {
            lines: BufReader::new(read_half).lines(),
            writer,
        }
    }

    /// Write raw text to the server.
    pub async fn send(&mut self, text: &str) {
        self.writer.write_all(text.as_bytes()).await.unwrap();
    }

    /// Next line from the server (without the newline), or None on EOF.
    /// Panics rather than hanging if nothing arrives.
    pub async fn recv_line(&mut self) -> Option<String> {
        tokio::time::timeout(Duration::from_secs(5), self.lines.next_line())
            .await
            .expect("timed out waiting for server line")
            .unwrap()
    }
}
