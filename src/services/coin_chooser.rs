//! Named UTXO selection strategies.

use crate::config::{keys, ConfigStore};

/// A registered coin-selection strategy.
#[derive(Debug, Clone, Copy)]
pub struct CoinChooser {
    /// Strategy name, also the persisted config value.
    pub name: &'static str,
    /// One-line description shown next to the selector.
    pub description: &'static str,
}

/// All registered strategies.
pub const COIN_CHOOSERS: &[CoinChooser] = &[
    CoinChooser {
        name: "Privacy",
        description: "Spend all coins from an address together and round the \
                      change to the precision of the other outputs.",
    },
    CoinChooser {
        name: "Random draw",
        description: "Draw unspent outputs at random until the target value is reached.",
    },
];

/// Strategy used when the config names none.
pub const DEFAULT_CHOOSER: &str = "Privacy";

/// Strategy names in display order.
pub fn chooser_names() -> Vec<&'static str> {
    let mut names: Vec<_> = COIN_CHOOSERS.iter().map(|c| c.name).collect();
    names.sort_unstable();
    names
}

/// Resolve the configured strategy, falling back to the default for an
/// unknown or absent name.
pub fn chooser_from_config(config: &impl ConfigStore) -> &'static CoinChooser {
    let name = config
        .get_str(keys::COIN_CHOOSER)
        .unwrap_or(DEFAULT_CHOOSER)
        .to_string();
    COIN_CHOOSERS
        .iter()
        .find(|c| c.name == name)
        .or_else(|| COIN_CHOOSERS.iter().find(|c| c.name == DEFAULT_CHOOSER))
        .expect("default coin chooser is registered")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WalletConfig;
    use serde_json::Value;

    #[test]
    fn unknown_name_falls_back_to_default() {
        let mut config = WalletConfig::new();
        config.set_key(keys::COIN_CHOOSER, Value::from("Nonsense"), false);
        assert_eq!(chooser_from_config(&config).name, DEFAULT_CHOOSER);
    }

    #[test]
    fn configured_name_is_resolved() {
        let mut config = WalletConfig::new();
        config.set_key(keys::COIN_CHOOSER, Value::from("Random draw"), false);
        assert_eq!(chooser_from_config(&config).name, "Random draw");
    }
}
