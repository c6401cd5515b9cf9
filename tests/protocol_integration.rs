//! Protocol tests over real sockets: welcome line and the command table.

use lined::config::ServerConfig;

mod common;

#[tokio::test]
async fn welcome_line_is_sent_on_connect() {
    let server = common::start_server(ServerConfig::default()).await;

    let mut client = common::TestClient::connect_raw(server.addr).await;
    let welcome = client.recv_line().await.unwrap();
    assert_eq!(welcome, "Welcome to the lined TCP server!");
}

#[tokio::test]
async fn help_returns_the_fixed_three_lines() {
    let server = common::start_server(ServerConfig::default()).await;

    let mut client = common::TestClient::connect(server.addr).await;
    client.send("/help\n").await;

    assert_eq!(client.recv_line().await.unwrap(), "/help - Show this help");
    assert_eq!(client.recv_line().await.unwrap(), "/time - Get server time");
    assert_eq!(client.recv_line().await.unwrap(), "/quit - Disconnect");
}

#[tokio::test]
async fn non_command_lines_are_echoed() {
    let server = common::start_server(ServerConfig::default()).await;

    let mut client = common::TestClient::connect(server.addr).await;
    for message in ["hello", "hello world", "  spaced  ", "99 bottles"] {
        client.send(&format!("{}\n", message)).await;
        assert_eq!(
            client.recv_line().await.unwrap(),
            format!("Echo: {}", message)
        );
    }
}

#[tokio::test]
async fn quit_says_goodbye_then_closes() {
    let server = common::start_server(ServerConfig::default()).await;

    let mut client = common::TestClient::connect(server.addr).await;
    client.send("/quit\n").await;

    assert_eq!(client.recv_line().await.unwrap(), "Goodbye!");
    // Subsequent reads hit EOF.
    assert_eq!(client.recv_line().await, None);
}

#[tokio::test]
async fn time_response_has_the_expected_prefix() {
    let server = common::start_server(ServerConfig::default()).await;

    let mut client = common::TestClient::connect(server.addr).await;
    client.send("/time\n").await;

    let line = client.recv_line().await.unwrap();
    assert!(
        line.starts_with("Server time: "),
        "unexpected response: {line:?}"
    );
}

#[tokio::test]
async fn pipelined_lines_are_answered_one_at_a_time() {
    let server = common::start_server(ServerConfig::default()).await;

    let mut client = common::TestClient::connect(server.addr).await;
    // Two messages in one write; the framing must split them.
    client.send("first\nsecond\n").await;

    assert_eq!(client.recv_line().await.unwrap(), "Echo: first");
    assert_eq!(client.recv_line().await.unwrap(), "Echo: second");
}

#[tokio::test]
async fn split_lines_are_reassembled() {
    let server = common::start_server(ServerConfig::default()).await;

    let mut client = common::TestClient::connect(server.addr).await;
    // One message across two writes; the framing must reassemble it.
    client.send("par").await;
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    client.send("tial\n").await;

    assert_eq!(client.recv_line().await.unwrap(), "Echo: partial");
}
