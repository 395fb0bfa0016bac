//! WebSocket message types.

use bytes::Bytes;

/// A data message received from or sent to the peer.
///
/// Control frames (ping, pong, close) never appear here; the connection
/// driver answers pings itself and reports closure through
/// [`Event::Closed`](super::Event::Closed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Text message (UTF-8)
    Text(String),
    /// Binary message
    Binary(Bytes),
}

impl Message {
    /// Check if this is a text message.
    pub fn is_text(&self) -> bool {
        matches!(self, Message::Text(_))
    }

    /// Check if this is a binary message.
    pub fn is_binary(&self) -> bool {
        matches!(self, Message::Binary(_))
    }

    /// Try to get as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Message::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as binary data.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Message::Binary(b) => Some(b),
            _ => None,
        }
    }

    /// Convert to bytes (text as UTF-8, binary as-is).
    pub fn into_data(self) -> Vec<u8> {
        match self {
            Message::Text(s) => s.into_bytes(),
            Message::Binary(b) => b.to_vec(),
        }
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<Bytes> for Message {
    fn from(data: Bytes) -> Self {
        Message::Binary(data)
    }
}

impl From<Vec<u8>> for Message {
    fn from(data: Vec<u8>) -> Self {
        Message::Binary(Bytes::from(data))
    }
}

/// WebSocket close codes (RFC 6455).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseCode(pub u16);

impl CloseCode {
    /// Normal closure
    pub const NORMAL: Self = Self(1000);
    /// Server going down
    pub const GOING_AWAY: Self = Self(1001);
    /// Protocol error
    pub const PROTOCOL_ERROR: Self = Self(1002);
    /// Unsupported data type
    pub const UNSUPPORTED: Self = Self(1003);
    /// No status received
    pub const NO_STATUS: Self = Self(1005);
    /// Abnormal closure
    pub const ABNORMAL: Self = Self(1006);
    /// Invalid payload data
    pub const INVALID_PAYLOAD: Self = Self(1007);
    /// Policy violation
    pub const POLICY_VIOLATION: Self = Self(1008);
    /// Message too big
    pub const MESSAGE_TOO_BIG: Self = Self(1009);
    /// Extension required
    pub const EXTENSION_REQUIRED: Self = Self(1010);
    /// Internal server error
    pub const INTERNAL_ERROR: Self = Self(1011);
    /// TLS handshake failure
    pub const TLS_HANDSHAKE: Self = Self(1015);

    /// The numeric close code.
    pub fn as_u16(self) -> u16 {
        self.0
    }
}

impl From<u16> for CloseCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl From<CloseCode> for u16 {
    fn from(code: CloseCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_types() {
        let text = Message::Text("hello".into());
        assert!(text.is_text());
        assert!(!text.is_binary());
        assert_eq!(text.as_text(), Some("hello"));

        let binary = Message::Binary(Bytes::from_static(b"data"));
        assert!(binary.is_binary());
        assert!(!binary.is_text());
        assert_eq!(binary.as_bytes(), Some(&b"data"[..]));
    }

    #[test]
    fn test_message_from() {
        assert!(Message::from("hi").is_text());
        assert!(Message::from("hi".to_string()).is_text());
        assert!(Message::from(vec![1u8, 2, 3]).is_binary());
        assert!(Message::from(Bytes::from_static(b"raw")).is_binary());
    }

    #[test]
    fn test_close_codes() {
        assert_eq!(CloseCode::NORMAL.0, 1000);
        assert_eq!(CloseCode::NO_STATUS.0, 1005);
        assert_eq!(CloseCode::ABNORMAL.0, 1006);

        let code: u16 = CloseCode::NORMAL.into();
        assert_eq!(code, 1000);
        assert_eq!(CloseCode::from(4000u16).as_u16(), 4000);
    }

    #[test]
    fn test_into_data() {
        let text = Message::Text("test".into());
        assert_eq!(text.into_data(), b"test");

        let binary = Message::Binary(Bytes::from_static(b"bin"));
        assert_eq!(binary.into_data(), b"bin");
    }
}
