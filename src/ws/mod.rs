//! WebSocket plumbing.
//!
//! Message and event types plus the per-connection driver task built on
//! tokio-tungstenite. The driver is internal; connections are opened through
//! [`Client`](crate::client::Client) and observed through
//! [`Events`](crate::client::Events).
//!
//! # Example
//! ```ignore
//! use chatwire::client::Client;
//! use chatwire::ws::Event;
//!
//! let (client, mut events) = Client::connect("ws://localhost:8000/ws")?;
//! while let Some(event) = events.next().await {
//!     if let Event::Message(msg) = event { /* ... */ }
//! }
//! ```

pub(crate) mod driver;
mod event;
mod message;

pub use event::{CloseEvent, Event};
pub use message::{CloseCode, Message};
