//! The chat command grammar.
//!
//! Input lines map to wire envelopes. The grammar is flat prefixes, no
//! quoting: `--sys-*` lines are server queries, `--send-*` lines carry a
//! payload, everything else is unknown.

use super::envelope::{Envelope, Kind};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `--sys-groups`: list the chat groups.
    Groups,
    /// `--sys-peoples`: list connected users.
    Peoples,
    /// `--sys-myId`: ask for our own id and name.
    MyId,
    /// `--sys-analytics`: ask for usage statistics.
    Analytics,
    /// `--sys-group-join-<id>`: join a group.
    JoinGroup(String),
    /// `--sys-exit`: leave the current group.
    LeaveGroup,
    /// `--send-p2p-<id> <text>`: direct message to one user.
    P2p { target: String, body: String },
    /// `--send-group-<id> <text>`: message to a group.
    Group { target: String, body: String },
    /// `exit`: end the session.
    Quit,
    /// Anything else.
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// Never fails; unrecognized input becomes [`Command::Unknown`].
    pub fn parse(line: &str) -> Command {
        let line = line.trim();
        match line {
            "exit" => Command::Quit,
            "--sys-groups" => Command::Groups,
            "--sys-peoples" => Command::Peoples,
            "--sys-myId" => Command::MyId,
            "--sys-analytics" => Command::Analytics,
            "--sys-exit" => Command::LeaveGroup,
            _ => {
                if let Some(id) = line.strip_prefix("--sys-group-join-") {
                    Command::JoinGroup(id.to_string())
                } else if let Some(rest) = line.strip_prefix("--send-p2p-") {
                    let (target, body) = split_target(rest);
                    Command::P2p { target, body }
                } else if let Some(rest) = line.strip_prefix("--send-group-") {
                    let (target, body) = split_target(rest);
                    Command::Group { target, body }
                } else {
                    Command::Unknown(line.to_string())
                }
            }
        }
    }

    /// The envelope this command puts on the wire.
    ///
    /// [`Command::Quit`] and [`Command::Unknown`] are handled locally and
    /// produce nothing.
    pub fn into_envelope(self) -> Option<Envelope> {
        match self {
            Command::Groups => Some(Envelope::new(Kind::Groups).with_content("--sys-groups")),
            Command::Peoples => Some(Envelope::new(Kind::Peoples).with_content("--sys-peoples")),
            Command::MyId => Some(Envelope::new(Kind::MyId).with_content("--sys-myId")),
            Command::Analytics => {
                Some(Envelope::new(Kind::Analytics).with_content("--sys-analytics"))
            }
            Command::JoinGroup(id) => Some(Envelope::new(Kind::GroupJoin).with_content(id)),
            Command::LeaveGroup => Some(Envelope::new(Kind::Exit).with_content("--sys-exit")),
            Command::P2p { target, body } => {
                Some(Envelope::new(Kind::P2p).with_target(target).with_content(body))
            }
            Command::Group { target, body } => {
                Some(Envelope::new(Kind::Group).with_target(target).with_content(body))
            }
            Command::Quit | Command::Unknown(_) => None,
        }
    }
}

/// Split `<target> <body...>` after a `--send-*-` prefix.
fn split_target(rest: &str) -> (String, String) {
    match rest.split_once(' ') {
        Some((target, body)) => (target.to_string(), body.to_string()),
        None => (rest.to_string(), String::new()),
    }
}
