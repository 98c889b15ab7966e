//! Wallet-local settings.
//!
//! Change-address policy lives on the wallet, not in the global config:
//! writes go through the wallet's own key/value store so the flags
//! travel with the wallet file.

use serde_json::{Map, Value};

use crate::config::keys;

/// Capability interface for the wallet-local settings the panel edits.
pub trait WalletSettings {
    /// Whether spends send change to dedicated change addresses.
    fn use_change(&self) -> bool;
    /// Set the change-address policy, persisting to the wallet store.
    fn set_use_change(&mut self, use_change: bool);
    /// Whether change is split across multiple addresses.
    fn multiple_change(&self) -> bool;
    /// Set the multiple-change policy, persisting to the wallet store.
    fn set_multiple_change(&mut self, multiple: bool);
}

/// Wallet-local key/value store.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct WalletDb {
    entries: Map<String, Value>,
}

impl WalletDb {
    /// Store `value` under `key`.
    pub fn put(&mut self, key: &str, value: impl Into<Value>) {
        self.entries.insert(key.to_string(), value.into());
    }

    /// Stored value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }
}

/// Minimal wallet exposing the settings the panel binds to.
#[derive(Debug, Clone)]
pub struct Wallet {
    db: WalletDb,
    use_change: bool,
    multiple_change: bool,
}

impl Wallet {
    /// Wallet with default change policy.
    pub fn new() -> Self {
        Self {
            db: WalletDb::default(),
            use_change: true,
            multiple_change: false,
        }
    }

    /// Restore a wallet from its store.
    pub fn from_db(db: WalletDb) -> Self {
        let use_change = db
            .get(keys::USE_CHANGE)
            .and_then(Value::as_bool)
            .unwrap_or(true);
        let multiple_change = db
            .get(keys::MULTIPLE_CHANGE)
            .and_then(Value::as_bool)
            .unwrap_or(false);
        Self {
            db,
            use_change,
            multiple_change,
        }
    }

    /// The wallet-local store.
    pub fn db(&self) -> &WalletDb {
        &self.db
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletSettings for Wallet {
    fn use_change(&self) -> bool {
        self.use_change
    }

    fn set_use_change(&mut self, use_change: bool) {
        self.use_change = use_change;
        self.db.put(keys::USE_CHANGE, use_change);
    }

    fn multiple_change(&self) -> bool {
        self.multiple_change
    }

    fn set_multiple_change(&mut self, multiple: bool) {
        self.multiple_change = multiple;
        self.db.put(keys::MULTIPLE_CHANGE, multiple);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_persist_to_wallet_store() {
        let mut wallet = Wallet::new();
        wallet.set_use_change(false);
        wallet.set_multiple_change(true);
        assert_eq!(wallet.db().get(keys::USE_CHANGE), Some(&Value::from(false)));
        assert_eq!(
            wallet.db().get(keys::MULTIPLE_CHANGE),
            Some(&Value::from(true))
        );
    }

    #[test]
    fn restores_policy_from_store() {
        let mut db = WalletDb::default();
        db.put(keys::USE_CHANGE, false);
        let wallet = Wallet::from_db(db);
        assert!(!wallet.use_change());
        assert!(!wallet.multiple_change());
    }
}
