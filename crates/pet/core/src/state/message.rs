/// Author of a chat transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Sender {
    User,
    Pet,
}

/// Immutable chat transcript entry.
///
/// The engine stores messages as given; ids and timestamps are produced by
/// whoever builds the message.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    /// RFC 3339 timestamp.
    pub timestamp: String,
}

impl Message {
    pub fn new(
        id: impl Into<String>,
        sender: Sender,
        text: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            sender,
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }
}
