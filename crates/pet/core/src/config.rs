/// Tuning constants for the pet rules.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PetConfig {
    /// Coin balance of a freshly created record.
    pub starting_coins: u32,
}

impl PetConfig {
    // ===== stat rules =====
    pub const STAT_MIN: i32 = 0;
    pub const STAT_MAX: i32 = 100;
    /// A stat strictly below this value counts as low.
    pub const LOW_STAT_THRESHOLD: u8 = 30;

    // ===== progression =====
    pub const XP_PER_LEVEL: u32 = 100;
    pub const COINS_PER_LEVEL: u32 = 10;
    pub const LEVEL_UP_STAT_BOOST: i32 = 20;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_COINS: u32 = 50;

    pub fn new() -> Self {
        Self {
            starting_coins: Self::DEFAULT_STARTING_COINS,
        }
    }

    pub fn with_starting_coins(starting_coins: u32) -> Self {
        Self { starting_coins }
    }
}

impl Default for PetConfig {
    fn default() -> Self {
        Self::new()
    }
}
