//! The pet engine: the single reducer for [`PetState`].
//!
//! Every rule lives here: clamped stat arithmetic, edge-triggered low-stat
//! warnings, experience and leveling, the coin economy, the calendar and the
//! append-only logs. Operations run to completion synchronously; callers are
//! responsible for serializing access (the runtime confines the state to one
//! worker task).
//!
//! Each operation returns the [`PetFields`] it touched so the caller can tell
//! a real mutation from a no-op.
mod errors;
mod leveling;
mod operation;

pub use errors::EngineError;
pub use operation::Operation;

use crate::config::PetConfig;
use crate::notification::{Notification, NotificationSink};
use crate::state::{Message, PetColor, PetFields, PetKind, PetState, StatKind};

/// Engine borrowing the state and the notification port for one or more
/// operations.
pub struct PetEngine<'a> {
    state: &'a mut PetState,
    sink: &'a mut dyn NotificationSink,
}

impl<'a> PetEngine<'a> {
    pub fn new(state: &'a mut PetState, sink: &'a mut dyn NotificationSink) -> Self {
        Self { state, sink }
    }

    /// Read access to the state being mutated.
    pub fn state(&self) -> &PetState {
        self.state
    }

    /// Dispatches an [`Operation`] to the matching method.
    pub fn execute(&mut self, operation: &Operation) -> Result<PetFields, EngineError> {
        let fields = match operation {
            Operation::StartGame => self.start_game(),
            Operation::CreatePet { name, kind, color } => {
                return self.create_pet(name, *kind, *color);
            }
            Operation::Feed { amount } => self.feed(*amount),
            Operation::Play { amount } => self.play(*amount),
            Operation::Clean { amount } => self.clean(*amount),
            Operation::Rest { amount } => self.rest(*amount),
            Operation::Increase { stat, amount } => self.increase(*stat, *amount),
            Operation::Decrease { stat, amount } => self.decrease(*stat, *amount),
            Operation::IncreaseExperience { amount } => self.increase_experience(*amount),
            Operation::CheckLevelUp => self.check_level_up(),
            Operation::GainExperience { amount } => self.gain_experience(*amount),
            Operation::IncreaseCoins { amount } => self.increase_coins(*amount),
            Operation::DecreaseCoins { amount } => return self.decrease_coins(*amount),
            Operation::AdvanceDay => self.advance_day(),
            Operation::AddToInventory { item_id } => self.add_to_inventory(item_id.clone()),
            Operation::AddMessage { message } => self.add_message(message.clone()),
        };
        Ok(fields)
    }

    // ===== session =====

    /// `NotStarted -> Adopting`. No-op once started.
    pub fn start_game(&mut self) -> PetFields {
        if self.state.game_started {
            return PetFields::empty();
        }
        self.state.game_started = true;
        PetFields::SESSION
    }

    /// One-time identity assignment.
    ///
    /// Leaves every other attribute and the session flag untouched and
    /// records the current day as the birthday.
    pub fn create_pet(
        &mut self,
        name: &str,
        kind: PetKind,
        color: PetColor,
    ) -> Result<PetFields, EngineError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::EmptyName);
        }
        if self.state.pet.is_adopted() {
            return Err(EngineError::AlreadyAdopted {
                name: self.state.pet.name.clone(),
            });
        }

        let pet = &mut self.state.pet;
        pet.name = name.to_string();
        pet.kind = kind;
        pet.color = color;
        pet.birthday = pet.days;
        Ok(PetFields::IDENTITY)
    }

    // ===== care =====

    pub fn feed(&mut self, amount: i32) -> PetFields {
        self.increase(StatKind::Hunger, amount)
    }

    /// Raises happiness by `amount` and drains energy by `amount / 2`.
    pub fn play(&mut self, amount: i32) -> PetFields {
        self.increase(StatKind::Happiness, amount) | self.decrease(StatKind::Energy, amount / 2)
    }

    pub fn clean(&mut self, amount: i32) -> PetFields {
        self.increase(StatKind::Cleanliness, amount)
    }

    pub fn rest(&mut self, amount: i32) -> PetFields {
        self.increase(StatKind::Energy, amount)
    }

    // ===== stat modifiers =====

    /// `stat = min(100, stat + amount)`; negative amounts pass through to the clamp.
    pub fn increase(&mut self, stat: StatKind, amount: i32) -> PetFields {
        let (before, after) = self.state.pet.vitals.apply_delta(stat, amount);
        changed(before != after, PetFields::VITALS)
    }

    /// `stat = max(0, stat - amount)`, warning once when the stat drops
    /// below the low threshold.
    ///
    /// Edge-triggered: fires only on the `>= threshold` to `< threshold`
    /// transition, never while the stat is already low.
    pub fn decrease(&mut self, stat: StatKind, amount: i32) -> PetFields {
        let (before, after) = self
            .state
            .pet
            .vitals
            .apply_delta(stat, amount.saturating_neg());

        if before >= PetConfig::LOW_STAT_THRESHOLD && after < PetConfig::LOW_STAT_THRESHOLD {
            self.sink.notify(Notification::LowStat {
                stat,
                pet_name: self.state.pet.name.clone(),
            });
        }

        changed(before != after, PetFields::VITALS)
    }

    // ===== economy =====

    pub fn increase_coins(&mut self, amount: u32) -> PetFields {
        let pet = &mut self.state.pet;
        let before = pet.coins;
        pet.coins = pet.coins.saturating_add(amount);
        changed(before != pet.coins, PetFields::COINS)
    }

    /// Spends `amount` coins, or fails without mutating anything.
    ///
    /// The only operation with a success/failure contract: purchase flows
    /// must check it before granting any item effect.
    pub fn decrease_coins(&mut self, amount: u32) -> Result<PetFields, EngineError> {
        let available = self.state.pet.coins;
        if available < amount {
            self.sink.notify(Notification::InsufficientFunds {
                required: amount,
                available,
            });
            return Err(EngineError::InsufficientFunds {
                required: amount,
                available,
            });
        }
        self.state.pet.coins = available - amount;
        Ok(changed(amount > 0, PetFields::COINS))
    }

    pub fn add_to_inventory(&mut self, item_id: impl Into<String>) -> PetFields {
        self.state.pet.inventory.push(item_id.into());
        PetFields::INVENTORY
    }

    // ===== calendar =====

    pub fn advance_day(&mut self) -> PetFields {
        let pet = &mut self.state.pet;
        pet.days = pet.days.saturating_add(1);
        PetFields::CALENDAR
    }

    // ===== messages =====

    pub fn add_message(&mut self, message: Message) -> PetFields {
        self.state.messages.push(message);
        PetFields::MESSAGES
    }

    /// Lets runtime flows signal through the same port as the engine rules.
    pub fn notify(&mut self, notification: Notification) {
        self.sink.notify(notification);
    }
}

fn changed(did_change: bool, fields: PetFields) -> PetFields {
    if did_change { fields } else { PetFields::empty() }
}
