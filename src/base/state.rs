/// The current state of a connection.
///
/// States advance monotonically; a connection never leaves [`ConnState::Closed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnState {
    /// The handshake has not completed yet.
    #[default]
    Connecting,

    /// The connection is established and messages flow.
    Open,

    /// A close was requested; inbound frames still drain.
    Closing,

    /// The connection is fully shut down.
    Closed,
}

impl ConnState {
    /// Whether the connection has reached its terminal state.
    pub fn is_terminal(self) -> bool {
        self == ConnState::Closed
    }
}
