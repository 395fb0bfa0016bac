//! The chat protocol spoken over the WebSocket connection.
//!
//! A chat session starts with a registration frame (the username as a bare
//! JSON string), then exchanges [`Envelope`] frames. [`Command`] maps the
//! interactive command grammar onto envelopes; the `chat_cli` example wires
//! both to a live connection.

mod command;
mod envelope;

pub use command::Command;
pub use envelope::{Envelope, Kind, Stats};
