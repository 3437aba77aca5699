use super::vitals::{StatKind, Vitals};
use crate::config::PetConfig;

/// Species offered by the adoption center.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum PetKind {
    Dragon,
    #[default]
    Cat,
    Dog,
    Bird,
    Rabbit,
}

/// Coat colors offered by the adoption center.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum PetColor {
    Red,
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Pink,
    Teal,
    Yellow,
}

/// Presentation mood derived from the vitals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mood {
    Happy,
    Sad,
    Hungry,
    Dirty,
    Tired,
}

/// The single mutable aggregate of the simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Pet {
    /// Empty until adoption.
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: PetKind,
    pub color: PetColor,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub vitals: Vitals,
    pub experience: u32,
    /// Starts at 1 and never decreases.
    pub level: u32,
    pub coins: u32,
    /// In-game day counter, starts at 1.
    pub days: u32,
    /// Value of `days` at adoption.
    pub birthday: u32,
    /// Item identifiers in purchase order; duplicates allowed.
    pub inventory: Vec<String>,
}

impl Pet {
    pub fn new(config: &PetConfig) -> Self {
        Self {
            name: String::new(),
            kind: PetKind::default(),
            color: PetColor::default(),
            vitals: Vitals::FULL,
            experience: 0,
            level: 1,
            coins: config.starting_coins,
            days: 1,
            birthday: 1,
            inventory: Vec::new(),
        }
    }

    pub fn is_adopted(&self) -> bool {
        !self.name.is_empty()
    }

    /// Experience required to leave the current level.
    pub fn experience_threshold(&self) -> u32 {
        self.level.saturating_mul(PetConfig::XP_PER_LEVEL)
    }

    /// Stats currently below the low-stat threshold, in display order.
    pub fn low_stats(&self) -> Vec<StatKind> {
        StatKind::ALL
            .into_iter()
            .filter(|stat| self.vitals.is_low(*stat))
            .collect()
    }

    /// Mood shown by the pet home view.
    ///
    /// Priority: sad > hungry > dirty > tired > happy.
    pub fn mood(&self) -> Mood {
        if self.vitals.is_low(StatKind::Happiness) {
            Mood::Sad
        } else if self.vitals.is_low(StatKind::Hunger) {
            Mood::Hungry
        } else if self.vitals.is_low(StatKind::Cleanliness) {
            Mood::Dirty
        } else if self.vitals.is_low(StatKind::Energy) {
            Mood::Tired
        } else {
            Mood::Happy
        }
    }

    /// Age in in-game days since adoption.
    pub fn age(&self) -> u32 {
        self.days.saturating_sub(self.birthday)
    }
}

impl Default for Pet {
    fn default() -> Self {
        Self::new(&PetConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pet_matches_fresh_store() {
        let pet = Pet::default();
        assert_eq!(pet.name, "");
        assert_eq!(pet.kind, PetKind::Cat);
        assert_eq!(pet.color, PetColor::Blue);
        assert_eq!(pet.vitals, Vitals::FULL);
        assert_eq!(pet.level, 1);
        assert_eq!(pet.coins, 50);
        assert_eq!((pet.days, pet.birthday), (1, 1));
        assert!(pet.inventory.is_empty());
    }

    #[test]
    fn mood_follows_priority_order() {
        let mut pet = Pet::default();
        assert_eq!(pet.mood(), Mood::Happy);

        pet.vitals.set(StatKind::Energy, 10);
        assert_eq!(pet.mood(), Mood::Tired);

        pet.vitals.set(StatKind::Cleanliness, 10);
        assert_eq!(pet.mood(), Mood::Dirty);

        pet.vitals.set(StatKind::Hunger, 10);
        assert_eq!(pet.mood(), Mood::Hungry);

        pet.vitals.set(StatKind::Happiness, 29);
        assert_eq!(pet.mood(), Mood::Sad);
        assert_eq!(pet.low_stats(), StatKind::ALL.to_vec());
    }

    #[test]
    fn threshold_scales_with_level() {
        let mut pet = Pet::default();
        assert_eq!(pet.experience_threshold(), 100);
        pet.level = 4;
        assert_eq!(pet.experience_threshold(), 400);
    }

    #[test]
    fn kinds_and_colors_parse_from_user_input() {
        assert_eq!("Dog".parse::<PetKind>().unwrap(), PetKind::Dog);
        assert_eq!("teal".parse::<PetColor>().unwrap(), PetColor::Teal);
        assert!("hamster".parse::<PetKind>().is_err());
    }
}
