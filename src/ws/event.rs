//! Connection lifecycle events.

use std::fmt;

use crate::base::error::WireError;

use super::message::{CloseCode, Message};

/// An event produced by the connection driver.
///
/// Events arrive in lifecycle order: at most one [`Event::Open`], any number
/// of [`Event::Message`] and [`Event::Error`], then exactly one
/// [`Event::Closed`] as the final event.
#[derive(Debug)]
pub enum Event {
    /// The handshake completed and the connection is open.
    Open,
    /// A data message arrived from the peer.
    Message(Message),
    /// Something went wrong; a close follows if the connection is lost.
    Error(WireError),
    /// The connection is down. No further events follow.
    Closed(CloseEvent),
}

impl Event {
    /// Check if this is the terminal close event.
    pub fn is_closed(&self) -> bool {
        matches!(self, Event::Closed(_))
    }
}

/// Summary of how a connection ended.
///
/// `was_clean` is true only when the peer sent a close frame (or the
/// close handshake completed); a dropped transport yields an unclean
/// close with code 1006 and an empty reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseEvent {
    /// Close code from the peer's close frame, or 1005/1006 when absent.
    pub code: CloseCode,
    /// Close reason from the peer's close frame, empty when absent.
    pub reason: String,
    /// Whether the close handshake completed.
    pub was_clean: bool,
}

impl CloseEvent {
    /// A clean close carrying the peer's code and reason.
    pub fn clean(code: CloseCode, reason: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.into(),
            was_clean: true,
        }
    }

    /// An abnormal close (1006): the transport died without a close frame.
    pub fn abnormal() -> Self {
        Self {
            code: CloseCode::ABNORMAL,
            reason: String::new(),
            was_clean: false,
        }
    }
}

impl fmt::Display for CloseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.was_clean {
            write!(
                f,
                "Connection closed clean, code={} reason={}",
                self.code.as_u16(),
                self.reason
            )
        } else {
            write!(f, "Connection died")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_close_display() {
        let close = CloseEvent::clean(CloseCode::NORMAL, "done");
        assert_eq!(
            close.to_string(),
            "Connection closed clean, code=1000 reason=done"
        );
    }

    #[test]
    fn test_clean_close_without_status() {
        let close = CloseEvent::clean(CloseCode::NO_STATUS, "");
        assert_eq!(
            close.to_string(),
            "Connection closed clean, code=1005 reason="
        );
    }

    #[test]
    fn test_abnormal_close_display() {
        let close = CloseEvent::abnormal();
        assert_eq!(close.to_string(), "Connection died");
        assert_eq!(close.code, CloseCode::ABNORMAL);
        assert!(!close.was_clean);
    }

    #[test]
    fn test_event_is_closed() {
        assert!(Event::Closed(CloseEvent::abnormal()).is_closed());
        assert!(!Event::Open.is_closed());
        assert!(!Event::Message(Message::Text("x".into())).is_closed());
    }
}
