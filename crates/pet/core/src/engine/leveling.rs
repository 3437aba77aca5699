//! Experience and level progression.
//!
//! Leveling is evaluated in a loop: an experience balance that overshoots
//! several thresholds settles all of them in one call, and every level gained
//! pays its own reward and raises its own notification. After any check,
//! `experience < level * XP_PER_LEVEL`.

use super::{PetEngine, changed};
use crate::config::PetConfig;
use crate::notification::Notification;
use crate::state::{PetFields, StatKind};

impl PetEngine<'_> {
    /// Adds experience without evaluating level-ups.
    pub fn increase_experience(&mut self, amount: u32) -> PetFields {
        let pet = &mut self.state.pet;
        let before = pet.experience;
        pet.experience = pet.experience.saturating_add(amount);
        changed(before != pet.experience, PetFields::PROGRESS)
    }

    /// Applies every level-up the current experience pays for.
    ///
    /// Per level: subtract the old threshold, `level += 1`, award
    /// `new_level * COINS_PER_LEVEL` coins and boost every vital by
    /// `LEVEL_UP_STAT_BOOST`. No-op while below the threshold.
    pub fn check_level_up(&mut self) -> PetFields {
        let mut fields = PetFields::empty();

        while self.state.pet.level < u32::MAX
            && self.state.pet.experience >= self.state.pet.experience_threshold()
        {
            let pet = &mut self.state.pet;
            let threshold = pet.experience_threshold();
            let new_level = pet.level + 1;
            let coin_reward = new_level.saturating_mul(PetConfig::COINS_PER_LEVEL);

            pet.experience -= threshold;
            pet.level = new_level;
            pet.coins = pet.coins.saturating_add(coin_reward);
            for stat in StatKind::ALL {
                pet.vitals.apply_delta(stat, PetConfig::LEVEL_UP_STAT_BOOST);
            }

            let pet_name = pet.name.clone();
            self.notify(Notification::LevelUp {
                pet_name,
                new_level,
                coin_reward,
            });
            fields |= PetFields::PROGRESS | PetFields::COINS | PetFields::VITALS;
        }

        fields
    }

    /// Adds experience and settles level-ups as one operation.
    pub fn gain_experience(&mut self, amount: u32) -> PetFields {
        self.increase_experience(amount) | self.check_level_up()
    }
}
