//! The minimal lifecycle client: connect, greet, log everything.
//!
//! Point it at a WebSocket server and watch the connection's life in the
//! console. The address defaults to the local chat server.
//!
//! ```bash
//! cargo run --example greeter
//! cargo run --example greeter -- ws://localhost:8000/ws
//! ```

use chatwire::client::Client;
use chatwire::logger::ConnectionLogger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ws://localhost:8000/ws".to_string());

    let (client, events) = Client::connect(&url)?;
    let _ = ConnectionLogger::new()
        .run_with(client, events, |line| println!("{line}"))
        .await;
    Ok(())
}
