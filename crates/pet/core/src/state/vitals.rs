use crate::config::PetConfig;

/// The four bounded vitality stats.
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
pub enum StatKind {
    Hunger,
    Happiness,
    Cleanliness,
    Energy,
}

impl StatKind {
    pub const ALL: [StatKind; 4] = [
        StatKind::Hunger,
        StatKind::Happiness,
        StatKind::Cleanliness,
        StatKind::Energy,
    ];
}

/// Current vitality values, each kept in `[STAT_MIN, STAT_MAX]`.
///
/// Fields are private so every write goes through [`Vitals::set`], which
/// clamps. Deserialized values are clamped as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawVitals", into = "RawVitals"))]
pub struct Vitals {
    hunger: u8,
    happiness: u8,
    cleanliness: u8,
    energy: u8,
}

impl Vitals {
    pub const FULL: Self = Self {
        hunger: PetConfig::STAT_MAX as u8,
        happiness: PetConfig::STAT_MAX as u8,
        cleanliness: PetConfig::STAT_MAX as u8,
        energy: PetConfig::STAT_MAX as u8,
    };

    pub fn new(hunger: i32, happiness: i32, cleanliness: i32, energy: i32) -> Self {
        Self {
            hunger: clamp_stat(hunger),
            happiness: clamp_stat(happiness),
            cleanliness: clamp_stat(cleanliness),
            energy: clamp_stat(energy),
        }
    }

    pub fn get(&self, stat: StatKind) -> u8 {
        match stat {
            StatKind::Hunger => self.hunger,
            StatKind::Happiness => self.happiness,
            StatKind::Cleanliness => self.cleanliness,
            StatKind::Energy => self.energy,
        }
    }

    /// Stores `value` clamped into the stat bounds.
    pub fn set(&mut self, stat: StatKind, value: i32) {
        let value = clamp_stat(value);
        match stat {
            StatKind::Hunger => self.hunger = value,
            StatKind::Happiness => self.happiness = value,
            StatKind::Cleanliness => self.cleanliness = value,
            StatKind::Energy => self.energy = value,
        }
    }

    /// Applies a signed delta and returns `(before, after)`.
    pub fn apply_delta(&mut self, stat: StatKind, delta: i32) -> (u8, u8) {
        let before = self.get(stat);
        self.set(stat, i32::from(before).saturating_add(delta));
        (before, self.get(stat))
    }

    pub fn hunger(&self) -> u8 {
        self.hunger
    }

    pub fn happiness(&self) -> u8 {
        self.happiness
    }

    pub fn cleanliness(&self) -> u8 {
        self.cleanliness
    }

    pub fn energy(&self) -> u8 {
        self.energy
    }

    pub fn is_low(&self, stat: StatKind) -> bool {
        self.get(stat) < PetConfig::LOW_STAT_THRESHOLD
    }
}

impl Default for Vitals {
    fn default() -> Self {
        Self::FULL
    }
}

/// `max(STAT_MIN, min(STAT_MAX, value))`
pub fn clamp_stat(value: i32) -> u8 {
    value.clamp(PetConfig::STAT_MIN, PetConfig::STAT_MAX) as u8
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawVitals {
    hunger: i32,
    happiness: i32,
    cleanliness: i32,
    energy: i32,
}

#[cfg(feature = "serde")]
impl From<RawVitals> for Vitals {
    fn from(raw: RawVitals) -> Self {
        Self::new(raw.hunger, raw.happiness, raw.cleanliness, raw.energy)
    }
}

#[cfg(feature = "serde")]
impl From<Vitals> for RawVitals {
    fn from(vitals: Vitals) -> Self {
        Self {
            hunger: vitals.hunger.into(),
            happiness: vitals.happiness.into(),
            cleanliness: vitals.cleanliness.into(),
            energy: vitals.energy.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_on_construction() {
        let vitals = Vitals::new(-5, 150, 30, 100);
        assert_eq!(vitals.hunger(), 0);
        assert_eq!(vitals.happiness(), 100);
        assert_eq!(vitals.cleanliness(), 30);
        assert_eq!(vitals.energy(), 100);
    }

    #[test]
    fn apply_delta_saturates_on_extreme_input() {
        let mut vitals = Vitals::FULL;
        assert_eq!(vitals.apply_delta(StatKind::Energy, i32::MIN), (100, 0));
        assert_eq!(vitals.apply_delta(StatKind::Energy, i32::MAX), (0, 100));
    }

    #[test]
    fn stat_names_parse_case_insensitively() {
        assert_eq!("Hunger".parse::<StatKind>().unwrap(), StatKind::Hunger);
        assert_eq!(StatKind::Cleanliness.to_string(), "cleanliness");
    }
}
