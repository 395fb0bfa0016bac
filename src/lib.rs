//! # chatwire
//!
//! A client-side WebSocket library for chat systems.
//!
//! `chatwire` opens one outbound WebSocket connection, surfaces its whole
//! lifecycle (open, messages, errors, close) as a typed event stream, and
//! speaks the JSON chat envelope of the surrounding system.
//!
//! ## Features
//!
//! - **Non-blocking connect**: the handle returns immediately, the handshake
//!   reports through events
//! - **Complete lifecycle**: every connection ends in exactly one close
//!   event, clean or not
//! - **Fire-and-forget sends**: text and JSON frames from sync or async code
//! - **Connection logging**: the browser-style lifecycle log lines,
//!   ready-made
//! - **Chat protocol**: the shared envelope schema and command grammar
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chatwire::client::Client;
//! use chatwire::logger::ConnectionLogger;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (client, events) = Client::connect("ws://localhost:8000/ws").unwrap();
//!     if let Some(close) = ConnectionLogger::new().run(client, events).await {
//!         println!("connection over: {close}");
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Core state and error definitions
//! - [`ws`] - Messages, events, and the connection driver
//! - [`client`] - Connection handle and builder
//! - [`logger`] - Lifecycle logging
//! - [`chat`] - Chat envelope schema and command grammar

pub mod base;
pub mod chat;
pub mod client;
pub mod logger;
pub mod ws;
