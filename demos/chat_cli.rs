//! Interactive chat client speaking the envelope protocol.
//!
//! ```bash
//! cargo run --example chat_cli -- ws://localhost:8000/ws
//! ```
//!
//! Commands:
//! - `--sys-groups`, `--sys-peoples`, `--sys-myId`, `--sys-analytics`
//! - `--sys-group-join-<id>`, `--sys-exit`
//! - `--send-p2p-<id> <text>`, `--send-group-<id> <text>`
//! - `exit` ends the session

use std::io::Write;

use chatwire::chat::{Command, Envelope};
use chatwire::client::Client;
use chatwire::ws::{Event, Message};
use time::format_description::well_known::Rfc3339;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "ws://localhost:8000/ws".to_string());

    let (client, mut events) = Client::connect(&url)?;
    match events.next().await {
        Some(Event::Open) => println!("Connected to {url}"),
        other => {
            eprintln!("failed to connect: {other:?}");
            return Ok(());
        }
    }

    print!("Enter your username: ");
    std::io::stdout().flush()?;

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let username = match stdin.next_line().await? {
        Some(line) => line.trim().to_string(),
        None => return Ok(()),
    };
    client.send_text(Envelope::username_frame(&username)?)?;

    loop {
        tokio::select! {
            event = events.next() => match event {
                Some(Event::Message(Message::Text(text))) => print_frame(&text),
                Some(Event::Message(Message::Binary(data))) => {
                    println!("received {} binary bytes", data.len());
                }
                Some(Event::Error(err)) => eprintln!("connection error: {err}"),
                Some(Event::Closed(close)) => {
                    println!("{close}");
                    break;
                }
                Some(Event::Open) => {}
                None => break,
            },
            line = stdin.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Command::Quit => {
                        // Already-closed is fine here; the event loop ends
                        // on the close event either way.
                        let _ = client.close();
                    }
                    Command::Unknown(text) => eprintln!("Unknown command: {text}"),
                    command => {
                        if let Some(envelope) = command.into_envelope() {
                            if let Err(err) = client.send_json(&envelope) {
                                eprintln!("Error sending message: {err}");
                            }
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

/// Server frames are envelopes most of the time, but plain text notices
/// slip through; print those raw.
fn print_frame(text: &str) {
    match Envelope::from_json(text) {
        Ok(envelope) => {
            let timestamp = envelope
                .timestamp
                .and_then(|ts| ts.format(&Rfc3339).ok())
                .unwrap_or_default();
            println!("[{timestamp}] {}: {}", envelope.username, envelope.content);
        }
        Err(_) => println!("{text}"),
    }
}
