use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Errors surfaced by the client API and the connection driver.
///
/// Handshake and transport failures wrap the underlying tungstenite error so
/// callers can inspect the cause; everything else is a local usage error.
#[derive(Debug, Error)]
pub enum WireError {
    // Configuration errors
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    #[error("No URL configured")]
    MissingUrl,
    #[error("Invalid handshake header: {0}")]
    InvalidHeader(String),

    // Connection errors
    #[error("WebSocket handshake failed: {0}")]
    Handshake(#[source] Box<tungstenite::Error>),
    #[error("WebSocket transport failed: {0}")]
    Transport(#[source] Box<tungstenite::Error>),
    #[error("Connection is not open")]
    NotConnected,

    // Payload errors
    #[error("Failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

impl WireError {
    pub(crate) fn handshake(err: tungstenite::Error) -> Self {
        WireError::Handshake(Box::new(err))
    }

    pub(crate) fn transport(err: tungstenite::Error) -> Self {
        WireError::Transport(Box::new(err))
    }
}
