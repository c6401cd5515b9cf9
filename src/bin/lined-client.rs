//! Interactive client for the lined server.
//!
//! A thin read-loop/print wrapper: server lines are printed as they
//! arrive, stdin lines are forwarded, and `quit` sends `/quit` before
//! exiting.

use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

#[derive(Parser)]
#[command(name = "lined-client")]
#[command(about = "Interactive client for the lined TCP server", long_about = None)]
struct Cli {
    /// Server address to connect to.
    #[arg(short, long, default_value = "127.0.0.1:54000")]
    address: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let stream = TcpStream::connect(&cli.address).await?;
    println!("Connected to server {}", cli.address);

    let (read_half, mut write_half) = stream.into_split();

    // Print server lines as they arrive.
    let mut server_lines = BufReader::new(read_half).lines();
    let printer = tokio::spawn(async move {
        while let Ok(Some(line)) = server_lines.next_line().await {
            println!("Server: {}", line);
        }
        println!("Server disconnected");
    });

    println!("Type messages (or 'quit' to exit):");
    let mut stdin_lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = stdin_lines.next_line().await? {
        if line == "quit" {
            write_half.write_all(b"/quit\n").await?;
            break;
        }
        write_half.write_all(format!("{}\n", line).as_bytes()).await?;
    }

    // Give the goodbye line a moment to arrive before exiting.
    let _ = tokio::time::timeout(Duration::from_secs(1), printer).await;

    Ok(())
}
