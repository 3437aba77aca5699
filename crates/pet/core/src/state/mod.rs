//! Authoritative pet state representation.
//!
//! [`PetState`] is the whole persisted record: the pet, the chat transcript
//! and the session flag. Runtime layers clone or query it but mutate it
//! exclusively through the engine.
mod fields;
mod message;
mod pet;
mod vitals;

pub use fields::PetFields;
pub use message::{Message, Sender};
pub use pet::{Mood, Pet, PetColor, PetKind};
pub use vitals::{StatKind, Vitals, clamp_stat};

use crate::config::PetConfig;

/// UI phase derived from the session flag and the pet name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SessionPhase {
    /// Welcome screen; the game has not been started.
    NotStarted,
    /// Game started, waiting for a pet to be adopted.
    Adopting,
    /// A named pet exists. Terminal.
    Active,
}

/// Canonical snapshot of everything that survives a restart.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PetState {
    pub pet: Pet,
    /// Insertion-ordered chat transcript.
    pub messages: Vec<Message>,
    /// One-way flag, false until the welcome screen is dismissed.
    pub game_started: bool,
}

impl PetState {
    pub fn new(config: &PetConfig) -> Self {
        Self {
            pet: Pet::new(config),
            messages: Vec::new(),
            game_started: false,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.game_started, self.pet.is_adopted()) {
            (false, _) => SessionPhase::NotStarted,
            (true, false) => SessionPhase::Adopting,
            (true, true) => SessionPhase::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase() == SessionPhase::Active
    }

    /// Returns the last `limit` messages in insertion order.
    pub fn recent_messages(&self, limit: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(limit);
        &self.messages[start..]
    }
}

impl Default for PetState {
    fn default() -> Self {
        Self::new(&PetConfig::default())
    }
}
