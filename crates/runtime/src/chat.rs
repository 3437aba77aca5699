//! Chat message construction and the stat effects of a conversation.

use chrono::Utc;
use uuid::Uuid;

use pet_core::{Message, Sender};

/// Happiness gained when the pet replies.
pub const REPLY_HAPPINESS_BONUS: i32 = 5;

/// Energy spent when the pet replies.
pub const REPLY_ENERGY_COST: i32 = 2;

/// Builds a message stamped with a fresh id and the current UTC time.
pub fn compose(sender: Sender, text: impl Into<String>) -> Message {
    Message::new(
        Uuid::new_v4().to_string(),
        sender,
        text,
        Utc::now().to_rfc3339(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composed_messages_have_unique_ids_and_rfc3339_timestamps() {
        let a = compose(Sender::User, "hi");
        let b = compose(Sender::Pet, "*wags*");

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert!(chrono::DateTime::parse_from_rfc3339(&a.timestamp).is_ok());
        assert_eq!(b.sender, Sender::Pet);
    }
}
