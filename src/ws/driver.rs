//! Connection driver task.
//!
//! One driver runs per connection. It owns the tungstenite stream, answers
//! pings, forwards data frames as events, and reduces every way a connection
//! can end to a single terminal [`Event::Closed`].

use futures::{SinkExt, StreamExt};
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::error::ProtocolError;
use tokio_tungstenite::{connect_async, tungstenite};
use url::Url;

use crate::base::error::WireError;
use crate::base::state::ConnState;

use super::event::{CloseEvent, Event};
use super::message::{CloseCode, Message};

/// A prepared client handshake request.
pub(crate) type Request = tungstenite::handshake::client::Request;

/// Commands from the client handle to the driver.
#[derive(Debug)]
pub(crate) enum Command {
    /// Send a text frame.
    SendText(String),
    /// Start the close handshake, optionally with a code and reason.
    Close(Option<(CloseCode, String)>),
}

/// Build the handshake request for `url` with extra `headers`.
pub(crate) fn build_request(url: &Url, headers: &[(String, String)]) -> Result<Request, WireError> {
    let mut request = url
        .as_str()
        .into_client_request()
        .map_err(WireError::handshake)?;
    for (name, value) in headers {
        let name = http::header::HeaderName::try_from(name.as_str())
            .map_err(|_| WireError::InvalidHeader(name.clone()))?;
        let value = http::header::HeaderValue::try_from(value.as_str())
            .map_err(|_| WireError::InvalidHeader(value.clone()))?;
        request.headers_mut().insert(name, value);
    }
    Ok(request)
}

/// The per-connection pump.
pub(crate) struct Driver {
    request: Request,
    url: Url,
    cmd_rx: mpsc::UnboundedReceiver<Command>,
    event_tx: mpsc::UnboundedSender<Event>,
    state_tx: watch::Sender<ConnState>,
}

impl Driver {
    pub(crate) fn new(
        request: Request,
        url: Url,
        cmd_rx: mpsc::UnboundedReceiver<Command>,
        event_tx: mpsc::UnboundedSender<Event>,
        state_tx: watch::Sender<ConnState>,
    ) -> Self {
        Self {
            request,
            url,
            cmd_rx,
            event_tx,
            state_tx,
        }
    }

    /// Run the connection to completion.
    ///
    /// Emits [`Event::Open`] once the handshake succeeds, pumps frames and
    /// commands, and always finishes with exactly one [`Event::Closed`].
    pub(crate) async fn run(self) {
        let Driver {
            request,
            url,
            mut cmd_rx,
            event_tx,
            state_tx,
        } = self;

        tracing::debug!(url = %url, "starting websocket handshake");
        let (ws, _response) = match connect_async(request).await {
            Ok(pair) => pair,
            Err(err) => {
                tracing::debug!(url = %url, error = %err, "websocket handshake failed");
                let _ = event_tx.send(Event::Error(WireError::handshake(err)));
                state_tx.send_replace(ConnState::Closed);
                drop(cmd_rx);
                let _ = event_tx.send(Event::Closed(CloseEvent::abnormal()));
                return;
            }
        };

        state_tx.send_replace(ConnState::Open);
        let _ = event_tx.send(Event::Open);
        tracing::debug!(url = %url, "websocket connection open");

        let (mut sink, mut stream) = ws.split();
        let mut cmd_open = true;
        // Set once the peer's close frame arrives; the stream keeps getting
        // polled afterwards so tungstenite can flush the close reply.
        let mut pending_close: Option<CloseEvent> = None;

        let close = loop {
            tokio::select! {
                cmd = cmd_rx.recv(), if cmd_open => match cmd {
                    Some(Command::SendText(text)) => {
                        if let Err(err) = sink.send(tungstenite::Message::Text(text)).await {
                            if is_close_sentinel(&err) || pending_close.is_some() {
                                // The connection is winding down; the stream
                                // arm reports how it ends.
                                tracing::debug!(error = %err, "send after close, draining");
                            } else {
                                let _ = event_tx.send(Event::Error(WireError::transport(err)));
                                break CloseEvent::abnormal();
                            }
                        }
                    }
                    Some(Command::Close(frame)) => {
                        state_tx.send_replace(ConnState::Closing);
                        let close_frame = frame.map(|(code, reason)| tungstenite::protocol::CloseFrame {
                            code: tungstenite::protocol::frame::coding::CloseCode::from(code.as_u16()),
                            reason: reason.into(),
                        });
                        let _ = sink.send(tungstenite::Message::Close(close_frame)).await;
                    }
                    // All client handles dropped: close politely, keep draining.
                    None => {
                        cmd_open = false;
                        state_tx.send_replace(ConnState::Closing);
                        let _ = sink.send(tungstenite::Message::Close(None)).await;
                    }
                },
                frame = stream.next() => match frame {
                    Some(Ok(tungstenite::Message::Text(text))) => {
                        let _ = event_tx.send(Event::Message(Message::Text(text)));
                    }
                    Some(Ok(tungstenite::Message::Binary(data))) => {
                        let _ = event_tx.send(Event::Message(Message::Binary(data.into())));
                    }
                    // tungstenite queues the pong reply itself
                    Some(Ok(tungstenite::Message::Ping(_)))
                    | Some(Ok(tungstenite::Message::Pong(_)))
                    | Some(Ok(tungstenite::Message::Frame(_))) => {}
                    Some(Ok(tungstenite::Message::Close(frame))) => {
                        state_tx.send_replace(ConnState::Closing);
                        pending_close = Some(match frame {
                            Some(frame) => CloseEvent::clean(
                                CloseCode::from(u16::from(frame.code)),
                                frame.reason.to_string(),
                            ),
                            None => CloseEvent::clean(CloseCode::NO_STATUS, ""),
                        });
                    }
                    Some(Err(err)) => {
                        // A close frame already arrived: the handshake is
                        // done as far as the peer is concerned.
                        if let Some(close) = pending_close.take() {
                            tracing::debug!(error = %err, "error draining close handshake");
                            break close;
                        }
                        tracing::debug!(error = %err, "websocket transport error");
                        let _ = event_tx.send(Event::Error(WireError::transport(err)));
                        break CloseEvent::abnormal();
                    }
                    None => {
                        break pending_close.take().unwrap_or_else(CloseEvent::abnormal);
                    }
                },
            }
        };

        state_tx.send_replace(ConnState::Closed);
        tracing::debug!(
            url = %url,
            code = close.code.as_u16(),
            clean = close.was_clean,
            "websocket connection closed"
        );
        // Close the command channel first so sends observed after the close
        // event deterministically fail.
        drop(cmd_rx);
        let _ = event_tx.send(Event::Closed(close));
    }
}

/// Errors tungstenite uses as sentinels for a finished or finishing
/// connection rather than a broken one.
fn is_close_sentinel(err: &tungstenite::Error) -> bool {
    matches!(
        err,
        tungstenite::Error::ConnectionClosed
            | tungstenite::Error::AlreadyClosed
            | tungstenite::Error::Protocol(ProtocolError::SendAfterClosing)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_sets_headers() {
        let url = Url::parse("ws://localhost:8000/ws").unwrap();
        let headers = vec![("authorization".to_string(), "Bearer token".to_string())];
        let request = build_request(&url, &headers).unwrap();
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer token"
        );
        // Handshake headers derived from the URL survive
        assert!(request.headers().contains_key("host"));
    }

    #[test]
    fn test_build_request_rejects_bad_header_name() {
        let url = Url::parse("ws://localhost:8000/ws").unwrap();
        let headers = vec![("bad header".to_string(), "value".to_string())];
        let result = build_request(&url, &headers);
        assert!(matches!(result, Err(WireError::InvalidHeader(_))));
    }

    #[test]
    fn test_close_sentinels() {
        assert!(is_close_sentinel(&tungstenite::Error::ConnectionClosed));
        assert!(is_close_sentinel(&tungstenite::Error::AlreadyClosed));
        assert!(is_close_sentinel(&tungstenite::Error::Protocol(
            ProtocolError::SendAfterClosing
        )));
        assert!(!is_close_sentinel(&tungstenite::Error::Utf8));
    }
}
