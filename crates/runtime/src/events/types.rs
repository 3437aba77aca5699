//! Event types for different topics.

use pet_core::{Message, Pet, PetFields};
use serde::{Deserialize, Serialize};

/// Events describing changes to the pet record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StateEvent {
    /// A command mutated the record.
    Updated {
        /// Label of the command that caused the change.
        cause: String,
        fields: PetFields,
        /// Pet snapshot after the change.
        pet: Box<Pet>,
    },

    /// A chat message was appended to the log.
    MessageAdded { message: Message },
}

/// Events emitted by the periodic ticker once applied to an active pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockEvent {
    /// Hunger, happiness and cleanliness decayed by `amount`.
    Decayed { amount: i32 },

    /// The in-game calendar moved to `day`.
    DayAdvanced { day: u32 },
}
