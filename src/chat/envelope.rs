//! The chat wire envelope.
//!
//! Every JSON frame on a chat connection is one [`Envelope`]. The schema is
//! shared with the chat server; field order and empty-field handling follow
//! what the server emits and accepts.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// What a chat frame means.
///
/// Unrecognized kinds deserialize as [`Kind::Unknown`] so a newer peer
/// cannot break the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    /// List the chat groups that exist.
    #[serde(rename = "sys-groups")]
    Groups,
    /// List the users currently connected.
    #[serde(rename = "sys-peoples")]
    Peoples,
    /// Ask the server for our own id and name.
    #[serde(rename = "sys-myId")]
    MyId,
    /// Ask the server for usage statistics.
    #[serde(rename = "sys-analytics")]
    Analytics,
    /// Join a group.
    #[serde(rename = "sys-group-join")]
    GroupJoin,
    /// Leave the current group.
    #[serde(rename = "sys-exit")]
    Exit,
    /// A message to a group.
    #[serde(rename = "group")]
    Group,
    /// A direct message to one user.
    #[serde(rename = "p2p")]
    P2p,
    /// An error reported by the server.
    #[serde(rename = "error")]
    Error,
    /// Anything this client does not know about.
    #[serde(other, rename = "unknown")]
    Unknown,
}

/// One chat frame.
///
/// The server spells the sender name `sender` while clients send
/// `username`; deserialization accepts both. Unset string fields travel as
/// empty strings, matching the peer's zero-value marshaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: Kind,
    #[serde(default)]
    pub user_id: String,
    #[serde(default, alias = "sender")]
    pub username: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, with = "rfc3339_compat")]
    pub timestamp: Option<OffsetDateTime>,
}

impl Envelope {
    /// Create an envelope of `kind`, stamped with the current time.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            user_id: String::new(),
            username: String::new(),
            content: String::new(),
            target: None,
            timestamp: Some(OffsetDateTime::now_utc()),
        }
    }

    /// Set the content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Set the target user or group id.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the sender identity.
    pub fn with_sender(mut self, user_id: impl Into<String>, username: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self.username = username.into();
        self
    }

    /// Serialize to the JSON wire form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse an envelope from a received text frame.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Usage statistics carried by an analytics reply.
    ///
    /// The server nests the statistics as a JSON document inside `content`.
    /// Returns `None` for other kinds or unparseable content.
    pub fn stats(&self) -> Option<Stats> {
        if self.kind != Kind::Analytics {
            return None;
        }
        serde_json::from_str(&self.content).ok()
    }

    /// The registration frame: a bare JSON string carrying the username.
    ///
    /// Sent as the first frame of a chat session, before any envelope.
    pub fn username_frame(username: &str) -> Result<String, serde_json::Error> {
        serde_json::to_string(username)
    }
}

/// Server usage statistics, nested in an analytics reply's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_users: i64,
    pub active_users: i64,
    pub total_groups: i64,
    pub total_messages: i64,
}

/// RFC 3339 timestamps, tolerant of the peer's zero value.
///
/// The chat peers marshal an unset time as `"timestamp":""`, so an empty
/// string must read back as `None` and `None` must write out as `""`.
mod rfc3339_compat {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    pub fn serialize<S>(value: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => {
                let text = ts.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&text)
            }
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        if text.is_empty() {
            return Ok(None);
        }
        OffsetDateTime::parse(&text, &Rfc3339)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
