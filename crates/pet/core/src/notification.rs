//! User-facing notifications raised by the engine.
//!
//! The engine only decides *that* something should be shown; wording, icons
//! and toast lifetimes belong to the frontend. [`Notification::message`]
//! provides the default English text.

use crate::state::StatKind;

/// Care actions offered on the pet home screen.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CareAction {
    Feed,
    Play,
    Clean,
    Rest,
}

impl CareAction {
    /// Stat delta applied by one button press.
    pub const fn amount(&self) -> i32 {
        match self {
            Self::Feed => 20,
            Self::Play => 15,
            Self::Clean => 25,
            Self::Rest => 30,
        }
    }

    /// Experience awarded for one button press.
    pub const fn experience(&self) -> u32 {
        match self {
            Self::Play => 10,
            Self::Feed | Self::Clean | Self::Rest => 5,
        }
    }
}

/// Event the engine signals into its [`NotificationSink`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Notification {
    /// A stat crossed from `>= threshold` to `< threshold`.
    LowStat { stat: StatKind, pet_name: String },

    /// One level gained; emitted once per level.
    LevelUp {
        pet_name: String,
        new_level: u32,
        coin_reward: u32,
    },

    /// A spend was refused; nothing changed.
    InsufficientFunds { required: u32, available: u32 },

    /// A shop item was paid for and its effects applied.
    Purchased { pet_name: String, item_id: String },

    /// A care button press finished.
    CareCompleted {
        pet_name: String,
        action: CareAction,
    },
}

impl Notification {
    /// Whether the frontend should style this as a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::LowStat { .. } | Self::InsufficientFunds { .. })
    }

    /// Default display text.
    pub fn message(&self) -> String {
        match self {
            Self::LowStat { stat, pet_name } => match stat {
                StatKind::Hunger => format!("{pet_name} is getting hungry!"),
                StatKind::Happiness => format!("{pet_name} is feeling sad!"),
                StatKind::Cleanliness => format!("{pet_name} needs a bath!"),
                StatKind::Energy => format!("{pet_name} is getting tired!"),
            },
            Self::LevelUp {
                pet_name,
                new_level,
                coin_reward,
            } => format!(
                "{pet_name} leveled up to level {new_level}! Earned {coin_reward} coins!"
            ),
            Self::InsufficientFunds { .. } => "Not enough coins!".to_string(),
            Self::Purchased { pet_name, item_id } => {
                format!("{pet_name} got a new {item_id}!")
            }
            Self::CareCompleted { pet_name, action } => match action {
                CareAction::Feed => format!("{pet_name} enjoyed the meal!"),
                CareAction::Play => format!("{pet_name} had fun playing!"),
                CareAction::Clean => format!("{pet_name} is squeaky clean!"),
                CareAction::Rest => format!("{pet_name} feels refreshed!"),
            },
        }
    }
}

/// Abstract "notify user" capability the engine signals into.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}
