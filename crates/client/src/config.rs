//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use pet_runtime::RuntimeConfig;

/// Configuration required to bootstrap the runtime and the terminal UI.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub save_dir: PathBuf,
    pub log_dir: PathBuf,
    /// Shop catalog RON file replacing the built-in one.
    pub shop_file: Option<PathBuf>,
    /// Chat phrase RON file replacing the built-in one.
    pub phrases_file: Option<PathBuf>,
    pub runtime: RuntimeConfig,
    pub frontend: FrontendConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            save_dir: crate::dirs::data_dir(),
            log_dir: crate::dirs::log_dir(),
            shop_file: None,
            phrases_file: None,
            runtime: RuntimeConfig::default(),
            frontend: FrontendConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `PET_SAVE_DIR`
    /// - `PET_SHOP_FILE` / `PET_PHRASES_FILE`
    /// - `PET_DECAY_INTERVAL_SECS` / `PET_DAY_INTERVAL_SECS`
    /// - `PET_CHAT_DELAY_MS`
    /// - `PET_DISABLE_TICKER`
    /// - `PET_MESSAGE_CAPACITY`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = read("PET_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }
        config.shop_file = read("PET_SHOP_FILE").map(PathBuf::from);
        config.phrases_file = read("PET_PHRASES_FILE").map(PathBuf::from);

        if let Some(secs) = parse::<u64>(read("PET_DECAY_INTERVAL_SECS")) {
            config.runtime.decay_interval = Duration::from_secs(secs.max(1));
        }
        if let Some(secs) = parse::<u64>(read("PET_DAY_INTERVAL_SECS")) {
            config.runtime.day_interval = Duration::from_secs(secs.max(1));
        }
        if let Some(ms) = parse::<u64>(read("PET_CHAT_DELAY_MS")) {
            config.runtime.chat_delay = Duration::from_millis(ms);
        }
        if let Some(disabled) = parse::<bool>(read("PET_DISABLE_TICKER")) {
            config.runtime.enable_ticker = !disabled;
        }
        if let Some(capacity) = parse::<usize>(read("PET_MESSAGE_CAPACITY")) {
            config.frontend.message_capacity = capacity.max(1);
        }

        config
    }
}

/// Settings for the terminal frontend.
#[derive(Clone, Debug)]
pub struct FrontendConfig {
    /// Number of chat messages shown by the `chat` command.
    pub message_capacity: usize,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            message_capacity: 20,
        }
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_runtime_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.runtime.decay_interval, Duration::from_secs(60));
        assert_eq!(config.runtime.day_interval, Duration::from_secs(300));
        assert!(config.runtime.enable_ticker);
        assert_eq!(config.frontend.message_capacity, 20);
        assert!(config.shop_file.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PET_SAVE_DIR", "/tmp/pets"),
            ("PET_DECAY_INTERVAL_SECS", "5"),
            ("PET_DAY_INTERVAL_SECS", "0"),
            ("PET_CHAT_DELAY_MS", "250"),
            ("PET_DISABLE_TICKER", "true"),
            ("PET_MESSAGE_CAPACITY", "0"),
            ("PET_SHOP_FILE", "shop.ron"),
        ]);

        assert_eq!(config.save_dir, PathBuf::from("/tmp/pets"));
        assert_eq!(config.runtime.decay_interval, Duration::from_secs(5));
        assert_eq!(config.runtime.day_interval, Duration::from_secs(1));
        assert_eq!(config.runtime.chat_delay, Duration::from_millis(250));
        assert!(!config.runtime.enable_ticker);
        assert_eq!(config.frontend.message_capacity, 1);
        assert_eq!(config.shop_file, Some(PathBuf::from("shop.ron")));
    }

    #[test]
    fn ignores_unparsable_values() {
        let config = config_from(&[("PET_DECAY_INTERVAL_SECS", "soon"), ("PET_SAVE_DIR", " ")]);
        assert_eq!(config.runtime.decay_interval, Duration::from_secs(60));
        assert_eq!(config.save_dir, crate::dirs::data_dir());
    }
}
