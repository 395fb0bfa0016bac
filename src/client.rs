//! WebSocket client with builder pattern.
//!
//! Provides a high-level, ergonomic API for opening a connection and
//! observing it as a stream of lifecycle events.
//!
//! # Example
//!
//! ```rust,ignore
//! use chatwire::client::Client;
//! use chatwire::ws::Event;
//!
//! let (client, mut events) = Client::builder()
//!     .url("ws://localhost:8000/ws")?
//!     .header("authorization", "Bearer token")
//!     .connect()?;
//!
//! while let Some(event) = events.next().await {
//!     match event {
//!         Event::Open => client.send_text("Hello from client")?,
//!         Event::Message(msg) => { /* ... */ }
//!         Event::Error(_) | Event::Closed(_) => break,
//!     }
//! }
//! ```

use std::fmt;

use serde::Serialize;
use tokio::sync::{mpsc, watch};
use url::Url;

use crate::base::error::WireError;
use crate::base::state::ConnState;
use crate::ws::driver::{self, Command, Driver};
use crate::ws::{CloseCode, Event};

/// Handle to a live WebSocket connection.
///
/// The handle is cheap to clone; all clones feed the same connection. Sends
/// are fire-and-forget: they hand the payload to the driver task and return
/// without waiting for the frame to hit the wire.
///
/// Dropping every handle starts a polite close handshake. The connection
/// itself is driven by a background task, so the handle stays usable from
/// non-async code once created.
#[derive(Clone)]
pub struct Client {
    cmd_tx: mpsc::UnboundedSender<Command>,
    state_rx: watch::Receiver<ConnState>,
    url: Url,
}

impl Client {
    /// Connect to a WebSocket server with default settings.
    ///
    /// Returns immediately with the handle and its event stream; the
    /// handshake runs in the background and reports through the events.
    /// Must be called from within a tokio runtime.
    pub fn connect(url: &str) -> Result<(Client, Events), WireError> {
        Client::builder().url(url)?.connect()
    }

    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Send a text frame.
    ///
    /// Fails with [`WireError::NotConnected`] once the connection is fully
    /// shut down. Frames queued before the handshake completes are sent as
    /// soon as it does.
    pub fn send_text(&self, text: impl Into<String>) -> Result<(), WireError> {
        self.cmd_tx
            .send(Command::SendText(text.into()))
            .map_err(|_| WireError::NotConnected)
    }

    /// Serialize `value` as JSON and send it as a text frame.
    pub fn send_json<T: Serialize>(&self, value: &T) -> Result<(), WireError> {
        let payload = serde_json::to_string(value)?;
        self.send_text(payload)
    }

    /// Start the close handshake without a status code.
    ///
    /// The peer observes close code 1005. Events keep flowing until the
    /// terminal [`Event::Closed`] arrives.
    pub fn close(&self) -> Result<(), WireError> {
        self.cmd_tx
            .send(Command::Close(None))
            .map_err(|_| WireError::NotConnected)
    }

    /// Start the close handshake with a code and reason.
    pub fn close_with(&self, code: CloseCode, reason: impl Into<String>) -> Result<(), WireError> {
        self.cmd_tx
            .send(Command::Close(Some((code, reason.into()))))
            .map_err(|_| WireError::NotConnected)
    }

    /// The current connection state.
    pub fn state(&self) -> ConnState {
        *self.state_rx.borrow()
    }

    /// Whether the connection is currently open.
    pub fn is_open(&self) -> bool {
        self.state() == ConnState::Open
    }

    /// The URL this client is connected to.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("url", &self.url.as_str())
            .field("state", &self.state())
            .finish()
    }
}

/// The event stream of one connection.
///
/// Events are buffered from the moment this handle exists, so nothing is
/// missed no matter how late the consumer starts polling. The stream yields
/// `None` after the terminal [`Event::Closed`] has been consumed.
#[derive(Debug)]
pub struct Events {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl Events {
    /// Receive the next event.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Builder for opening a [`Client`] connection.
#[derive(Debug, Default, Clone)]
pub struct ClientBuilder {
    url: Option<Url>,
    headers: Vec<(String, String)>,
}

impl ClientBuilder {
    /// Create a new client builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the URL to connect to.
    pub fn url(mut self, url: &str) -> Result<Self, WireError> {
        let url = Url::parse(url)?;

        // Validate scheme
        if url.scheme() != "ws" && url.scheme() != "wss" {
            return Err(WireError::UnsupportedScheme(url.scheme().to_string()));
        }

        self.url = Some(url);
        Ok(self)
    }

    /// Add a header to the WebSocket handshake.
    ///
    /// Validated when [`connect`](Self::connect) runs.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Get the URL if set.
    pub fn get_url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Check if secure (wss://).
    pub fn is_secure(&self) -> bool {
        self.url.as_ref().is_some_and(|u| u.scheme() == "wss")
    }

    /// Spawn the connection and return its handle and event stream.
    ///
    /// Fails fast on a missing URL or malformed header; handshake failures
    /// are reported through the event stream instead, as an
    /// [`Event::Error`] followed by an unclean [`Event::Closed`].
    /// Must be called from within a tokio runtime.
    pub fn connect(self) -> Result<(Client, Events), WireError> {
        let url = self.url.ok_or(WireError::MissingUrl)?;
        let request = driver::build_request(&url, &self.headers)?;

        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(ConnState::Connecting);

        let driver = Driver::new(request, url.clone(), cmd_rx, event_tx, state_tx);
        tokio::spawn(driver.run());

        let client = Client {
            cmd_tx,
            state_rx,
            url,
        };
        Ok((client, Events { rx: event_rx }))
    }
}
