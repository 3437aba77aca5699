use crate::state::{Message, PetColor, PetKind, StatKind};

/// Every mutation the engine accepts, as data.
///
/// Lets the runtime queue, log and replay operations without knowing the
/// engine's method surface.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "op", rename_all = "snake_case"))]
pub enum Operation {
    StartGame,
    CreatePet {
        name: String,
        kind: PetKind,
        color: PetColor,
    },
    Feed { amount: i32 },
    Play { amount: i32 },
    Clean { amount: i32 },
    Rest { amount: i32 },
    Increase { stat: StatKind, amount: i32 },
    Decrease { stat: StatKind, amount: i32 },
    IncreaseExperience { amount: u32 },
    CheckLevelUp,
    /// `IncreaseExperience` followed by `CheckLevelUp`, atomically.
    GainExperience { amount: u32 },
    IncreaseCoins { amount: u32 },
    DecreaseCoins { amount: u32 },
    AdvanceDay,
    AddToInventory { item_id: String },
    AddMessage { message: Message },
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StartGame => "start_game",
            Self::CreatePet { .. } => "create_pet",
            Self::Feed { .. } => "feed",
            Self::Play { .. } => "play",
            Self::Clean { .. } => "clean",
            Self::Rest { .. } => "rest",
            Self::Increase { .. } => "increase",
            Self::Decrease { .. } => "decrease",
            Self::IncreaseExperience { .. } => "increase_experience",
            Self::CheckLevelUp => "check_level_up",
            Self::GainExperience { .. } => "gain_experience",
            Self::IncreaseCoins { .. } => "increase_coins",
            Self::DecreaseCoins { .. } => "decrease_coins",
            Self::AdvanceDay => "advance_day",
            Self::AddToInventory { .. } => "add_to_inventory",
            Self::AddMessage { .. } => "add_message",
        }
    }
}
