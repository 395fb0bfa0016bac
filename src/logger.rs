//! Connection lifecycle logging.
//!
//! [`ConnectionLogger`] turns the event stream of one connection into
//! human-readable log lines and greets the server the moment the
//! connection opens. It is the reference consumer of the event API; the
//! `greeter` example runs it against a live server.

use tracing::{info, warn};

use crate::base::error::WireError;
use crate::client::{Client, Events};
use crate::ws::{CloseEvent, Event, Message};

/// The text frame sent to the server as soon as the connection opens.
pub const DEFAULT_GREETING: &str = "Hello from client";

/// Renders connection lifecycle events as log lines.
///
/// One logger observes one connection. After the close event has been
/// rendered the logger goes quiet; nothing is reported for a connection
/// that is already down.
#[derive(Debug, Clone)]
pub struct ConnectionLogger {
    greeting: String,
    closed: bool,
}

impl Default for ConnectionLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionLogger {
    /// Create a logger that greets with [`DEFAULT_GREETING`].
    pub fn new() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            closed: false,
        }
    }

    /// Create a logger with a custom greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
            closed: false,
        }
    }

    /// The greeting this logger sends on open.
    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    /// Render one event as a log line.
    ///
    /// Returns `None` for events that arrive after the connection closed.
    /// Binary payloads are reported by length only.
    pub fn handle(&mut self, event: &Event) -> Option<String> {
        if self.closed {
            return None;
        }
        match event {
            Event::Open => Some("Connection established!".to_string()),
            Event::Message(Message::Text(text)) => Some(format!("received from server {text}")),
            Event::Message(Message::Binary(data)) => {
                Some(format!("received from server {} binary bytes", data.len()))
            }
            Event::Error(err) => Some(format!("connection error: {err}")),
            Event::Closed(close) => {
                self.closed = true;
                Some(close.to_string())
            }
        }
    }

    /// Drive a connection to completion, logging every event.
    ///
    /// Sends the greeting when the connection opens and returns the close
    /// summary, or `None` if the event stream ended without one.
    pub async fn run(self, client: Client, events: Events) -> Option<CloseEvent> {
        self.run_with(client, events, |_| {}).await
    }

    /// Like [`run`](Self::run), but also hands each rendered line to `sink`.
    pub async fn run_with<F>(
        mut self,
        client: Client,
        mut events: Events,
        mut sink: F,
    ) -> Option<CloseEvent>
    where
        F: FnMut(&str),
    {
        while let Some(event) = events.next().await {
            if let Some(line) = self.handle(&event) {
                info!("{line}");
                sink(&line);
            }
            match event {
                Event::Open => {
                    if let Err(err) = self.greet(&client) {
                        warn!(error = %err, "failed to send greeting");
                    }
                }
                Event::Closed(close) => return Some(close),
                _ => {}
            }
        }
        None
    }

    fn greet(&self, client: &Client) -> Result<(), WireError> {
        client.send_text(self.greeting.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ws::CloseCode;

    #[test]
    fn test_open_line() {
        let mut logger = ConnectionLogger::new();
        let line = logger.handle(&Event::Open);
        assert_eq!(line.as_deref(), Some("Connection established!"));
    }

    #[test]
    fn test_message_lines_verbatim() {
        let mut logger = ConnectionLogger::new();
        for payload in ["alpha", "beta", "payload with spaces"] {
            let event = Event::Message(Message::Text(payload.to_string()));
            let line = logger.handle(&event);
            assert_eq!(line, Some(format!("received from server {payload}")));
        }
    }

    #[test]
    fn test_binary_reported_by_length() {
        let mut logger = ConnectionLogger::new();
        let event = Event::Message(Message::Binary(vec![0u8; 16].into()));
        let line = logger.handle(&event);
        assert_eq!(line.as_deref(), Some("received from server 16 binary bytes"));
    }

    #[test]
    fn test_clean_close_line() {
        let mut logger = ConnectionLogger::new();
        let event = Event::Closed(CloseEvent::clean(CloseCode::NORMAL, "done"));
        let line = logger.handle(&event);
        assert_eq!(
            line.as_deref(),
            Some("Connection closed clean, code=1000 reason=done")
        );
    }

    #[test]
    fn test_unclean_close_line() {
        let mut logger = ConnectionLogger::new();
        let event = Event::Closed(CloseEvent::abnormal());
        let line = logger.handle(&event);
        assert_eq!(line.as_deref(), Some("Connection died"));
    }

    #[test]
    fn test_quiet_after_close() {
        let mut logger = ConnectionLogger::new();
        logger.handle(&Event::Closed(CloseEvent::abnormal()));

        assert!(logger.handle(&Event::Open).is_none());
        assert!(logger
            .handle(&Event::Message(Message::Text("late".into())))
            .is_none());
        assert!(logger
            .handle(&Event::Closed(CloseEvent::clean(CloseCode::NORMAL, "")))
            .is_none());
    }

    #[test]
    fn test_custom_greeting() {
        let logger = ConnectionLogger::with_greeting("hi there");
        assert_eq!(logger.greeting(), "hi there");
        assert_eq!(ConnectionLogger::new().greeting(), DEFAULT_GREETING);
    }
}
