//! Wallet configuration store.
//!
//! A JSON key/value document persisted under the user config directory.
//! Writes follow the immediate-write model: `set_key` with `save = true`
//! flushes the whole document; `save = false` stages the value in memory
//! until the next saving write. Keys supplied on the command line or by
//! an administrator land in an override layer and are not modifiable
//! from the settings panel.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::units::BaseUnit;

pub mod keys;

/// Errors from loading or persisting the configuration document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading or writing the backing file failed.
    #[error("config file I/O: {0}")]
    Io(#[from] std::io::Error),
    /// The backing file is not a JSON object.
    #[error("malformed config document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Capability interface the settings panel depends on.
///
/// The store maps string keys to JSON values. Typed accessors for hot
/// keys are provided on top of the three primitive operations so that
/// callers never reinterpret raw values themselves.
pub trait ConfigStore {
    /// Current value for `key`, if any. Override values win.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Write `key`. A null value removes the key. `save` flushes the
    /// document to disk; a failed flush is logged, never surfaced.
    fn set_key(&mut self, key: &str, value: Value, save: bool);

    /// False for keys locked by an override; the panel must disable the
    /// corresponding control rather than write through it.
    fn is_modifiable(&self, key: &str) -> bool;

    /// Current value for `key`, or `default` when absent.
    fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.get(key).unwrap_or(default)
    }

    /// Boolean value with a default.
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// String value, if present and a string.
    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Base display unit (hot key).
    fn base_unit(&self) -> BaseUnit {
        self.get_str(keys::BASE_UNIT)
            .and_then(BaseUnit::from_ticker)
            .unwrap_or_default()
    }

    /// Decimal point implied by the base unit.
    fn decimal_point(&self) -> u8 {
        self.base_unit().decimal_point()
    }

    /// Zeros padded after the decimal point, clamped to the decimal point.
    fn num_zeros(&self) -> u8 {
        let raw = self
            .get(keys::NUM_ZEROS)
            .and_then(Value::as_u64)
            .unwrap_or(0)
            .min(u8::MAX as u64) as u8;
        raw.min(self.decimal_point())
    }

    /// Switch the base unit, re-clamping the zero padding to the new
    /// decimal point in the same flush.
    fn set_base_unit(&mut self, unit: BaseUnit) {
        let nz = self.num_zeros().min(unit.decimal_point());
        self.set_key(keys::BASE_UNIT, Value::from(unit.ticker()), false);
        self.set_key(keys::NUM_ZEROS, Value::from(nz), true);
    }

    /// Configured GUI language code, empty for the system default.
    fn language(&self) -> String {
        self.get_str(keys::LANGUAGE).unwrap_or("").to_string()
    }

    /// Stored color theme value, defaulting to the dark theme.
    fn color_theme(&self) -> String {
        self.get_str(keys::COLOR_THEME).unwrap_or("dark").to_string()
    }

    /// Whether debug logs are persisted to disk.
    fn log_to_file(&self) -> bool {
        self.get_bool(keys::LOG_TO_FILE, true)
    }

    /// Whether coin amounts render with thousands separators.
    fn amount_thousands_sep(&self) -> bool {
        self.get_bool(keys::AMT_THOUSANDS_SEP, false)
    }

    /// Whether coin amounts render with extra post-satoshi precision.
    fn amount_extra_precision(&self) -> bool {
        self.get_bool(keys::AMT_EXTRA_PRECISION, false)
    }
}

/// JSON-backed configuration store.
#[derive(Debug, Clone, Default)]
pub struct WalletConfig {
    path: Option<PathBuf>,
    data: Map<String, Value>,
    overrides: Map<String, Value>,
}

impl WalletConfig {
    /// In-memory store with no backing file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file path under the user config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("corvid-wallet")
            .join("config.json")
    }

    /// Load the document at `path`. A missing file yields defaults with
    /// the path remembered for later saves.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let data = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str::<Map<String, Value>>(&content)?
        } else {
            Map::new()
        };
        Ok(Self {
            path: Some(path),
            data,
            overrides: Map::new(),
        })
    }

    /// Load `path`, falling back to defaults on any error.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::load(path.clone()).unwrap_or_else(|e| {
            warn!("failed to load config {}: {}, using defaults", path.display(), e);
            Self {
                path: Some(path),
                data: Map::new(),
                overrides: Map::new(),
            }
        })
    }

    /// Backing file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Install an override for `key`. The key becomes read-only for the
    /// panel and the override value shadows the stored one.
    pub fn set_override(&mut self, key: &str, value: Value) {
        self.overrides.insert(key.to_string(), value);
    }

    /// Flush the document to its backing file.
    pub fn save(&self) -> Result<(), ConfigError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl ConfigStore for WalletConfig {
    fn get(&self, key: &str) -> Option<&Value> {
        self.overrides.get(key).or_else(|| self.data.get(key))
    }

    fn set_key(&mut self, key: &str, value: Value, save: bool) {
        if !self.is_modifiable(key) {
            warn!("refusing to set locked config key {key}");
            return;
        }
        debug!("config: {key} = {value}");
        if value.is_null() {
            self.data.remove(key);
        } else {
            self.data.insert(key.to_string(), value);
        }
        if save {
            if let Err(e) = self.save() {
                warn!("failed to persist config: {e}");
            }
        }
    }

    fn is_modifiable(&self, key: &str) -> bool {
        !self.overrides.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_roundtrips() {
        let mut config = WalletConfig::new();
        config.set_key(keys::NUM_ZEROS, Value::from(3), false);
        assert_eq!(config.num_zeros(), 3);
    }

    #[test]
    fn get_or_falls_back_to_default() {
        let mut config = WalletConfig::new();
        let fallback = Value::from("CoinGecko");
        assert_eq!(config.get_or(keys::USE_EXCHANGE, &fallback), &fallback);
        config.set_key(keys::USE_EXCHANGE, Value::from("Bittrex"), false);
        assert_eq!(
            config.get_or(keys::USE_EXCHANGE, &fallback),
            &Value::from("Bittrex")
        );
    }

    #[test]
    fn null_removes_key() {
        let mut config = WalletConfig::new();
        config.set_key(keys::BLOCK_EXPLORER_CUSTOM, Value::from("x"), false);
        config.set_key(keys::BLOCK_EXPLORER_CUSTOM, Value::Null, false);
        assert!(config.get(keys::BLOCK_EXPLORER_CUSTOM).is_none());
    }

    #[test]
    fn overridden_key_is_locked() {
        let mut config = WalletConfig::new();
        config.set_override(keys::LANGUAGE, Value::from("de_DE"));
        assert!(!config.is_modifiable(keys::LANGUAGE));
        config.set_key(keys::LANGUAGE, Value::from("fr_FR"), false);
        assert_eq!(config.language(), "de_DE");
    }

    #[test]
    fn num_zeros_clamped_to_decimal_point() {
        let mut config = WalletConfig::new();
        config.set_key(keys::NUM_ZEROS, Value::from(8), false);
        config.set_base_unit(BaseUnit::MicroKaw);
        assert_eq!(config.decimal_point(), 2);
        assert_eq!(config.num_zeros(), 2);
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = WalletConfig::load(&path).unwrap();
        config.set_key(keys::COIN_CHOOSER, Value::from("Privacy"), true);

        let reloaded = WalletConfig::load(&path).unwrap();
        assert_eq!(reloaded.get_str(keys::COIN_CHOOSER), Some("Privacy"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = WalletConfig::load(dir.path().join("absent.json")).unwrap();
        assert_eq!(config.base_unit(), BaseUnit::Kaw);
        assert_eq!(config.num_zeros(), 0);
    }
}
