//! Fiat exchange-rate service.
//!
//! The panel talks to the fiat overlay through [`FiatService`]; the
//! concrete [`FxService`] stores its switches in the shared config and
//! answers currency/exchange queries from a static provider table. Rate
//! fetching itself is outside this crate; `request_refresh` only records
//! the eager-refetch request for the fetcher to pick up.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tracing::debug;

use crate::config::{keys, ConfigStore};

/// Capability interface for the fiat overlay.
pub trait FiatService {
    /// Whether the fiat overlay is enabled.
    fn is_enabled(&self) -> bool;
    /// Enable or disable the overlay. Does not touch the stored currency.
    fn set_enabled(&mut self, enabled: bool);
    /// Selected fiat currency code.
    fn currency(&self) -> String;
    /// Select a fiat currency.
    fn set_currency(&mut self, ccy: &str);
    /// Selected exchange-rate source.
    fn exchange(&self) -> String;
    /// Select an exchange-rate source.
    fn set_exchange(&mut self, name: &str);
    /// Currency codes offered, optionally restricted to sources with
    /// historical rates.
    fn currencies(&self, history_only: bool) -> Vec<String>;
    /// Sources quoting `ccy`, optionally restricted to historical rates.
    fn exchanges_for(&self, ccy: &str, history_only: bool) -> Vec<String>;
    /// Whether history rows show historical fiat rates.
    fn history_rates(&self) -> bool;
    /// Toggle historical-rate mode.
    fn set_history_rates(&mut self, on: bool);
    /// Whether history rows show capital gains.
    fn capital_gains(&self) -> bool;
    /// Toggle capital-gains display.
    fn set_capital_gains(&mut self, on: bool);
    /// Whether the address list shows fiat balances.
    fn fiat_addresses(&self) -> bool;
    /// Toggle fiat balances in the address list.
    fn set_fiat_addresses(&mut self, on: bool);
    /// Ask the rate fetcher for an eager historical refetch.
    fn request_refresh(&mut self);
}

struct ExchangeInfo {
    name: &'static str,
    currencies: &'static [&'static str],
    has_history: bool,
}

const EXCHANGES: &[ExchangeInfo] = &[
    ExchangeInfo {
        name: "CoinGecko",
        currencies: &[
            "USD", "EUR", "GBP", "JPY", "AUD", "CAD", "CHF", "CNY", "BRL", "RUB",
        ],
        has_history: true,
    },
    ExchangeInfo {
        name: "CryptoCompare",
        currencies: &["USD", "EUR", "GBP", "JPY", "KRW"],
        has_history: true,
    },
    ExchangeInfo {
        name: "Bittrex",
        currencies: &["USD", "USDT", "BTC"],
        has_history: false,
    },
    ExchangeInfo {
        name: "TradeOgre",
        currencies: &["BTC", "USD"],
        has_history: false,
    },
];

/// Source used when the config names none.
pub const DEFAULT_EXCHANGE: &str = "CoinGecko";
/// Currency used when the config names none.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Config-backed [`FiatService`] over the static provider table.
pub struct FxService<C: ConfigStore> {
    config: Arc<Mutex<C>>,
    refreshes_requested: usize,
}

impl<C: ConfigStore> FxService<C> {
    /// Service sharing the given config store.
    pub fn new(config: Arc<Mutex<C>>) -> Self {
        Self {
            config,
            refreshes_requested: 0,
        }
    }

    /// How many eager refetches have been requested.
    pub fn refreshes_requested(&self) -> usize {
        self.refreshes_requested
    }
}

impl<C: ConfigStore> FiatService for FxService<C> {
    fn is_enabled(&self) -> bool {
        self.config.lock().get_bool(keys::USE_EXCHANGE_RATE, false)
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.config
            .lock()
            .set_key(keys::USE_EXCHANGE_RATE, Value::from(enabled), true);
    }

    fn currency(&self) -> String {
        self.config
            .lock()
            .get_str(keys::CURRENCY)
            .unwrap_or(DEFAULT_CURRENCY)
            .to_string()
    }

    fn set_currency(&mut self, ccy: &str) {
        self.config
            .lock()
            .set_key(keys::CURRENCY, Value::from(ccy), true);
    }

    fn exchange(&self) -> String {
        self.config
            .lock()
            .get_str(keys::USE_EXCHANGE)
            .unwrap_or(DEFAULT_EXCHANGE)
            .to_string()
    }

    fn set_exchange(&mut self, name: &str) {
        self.config
            .lock()
            .set_key(keys::USE_EXCHANGE, Value::from(name), true);
    }

    fn currencies(&self, history_only: bool) -> Vec<String> {
        let mut out: Vec<String> = EXCHANGES
            .iter()
            .filter(|e| !history_only || e.has_history)
            .flat_map(|e| e.currencies.iter().map(|c| c.to_string()))
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    fn exchanges_for(&self, ccy: &str, history_only: bool) -> Vec<String> {
        let mut out: Vec<String> = EXCHANGES
            .iter()
            .filter(|e| !history_only || e.has_history)
            .filter(|e| e.currencies.contains(&ccy))
            .map(|e| e.name.to_string())
            .collect();
        out.sort_unstable();
        out
    }

    fn history_rates(&self) -> bool {
        self.config.lock().get_bool(keys::HISTORY_RATES, false)
    }

    fn set_history_rates(&mut self, on: bool) {
        self.config
            .lock()
            .set_key(keys::HISTORY_RATES, Value::from(on), true);
    }

    fn capital_gains(&self) -> bool {
        self.config
            .lock()
            .get_bool(keys::HISTORY_CAPITAL_GAINS, false)
    }

    fn set_capital_gains(&mut self, on: bool) {
        self.config
            .lock()
            .set_key(keys::HISTORY_CAPITAL_GAINS, Value::from(on), true);
    }

    fn fiat_addresses(&self) -> bool {
        self.config.lock().get_bool(keys::FIAT_ADDRESS, false)
    }

    fn set_fiat_addresses(&mut self, on: bool) {
        self.config
            .lock()
            .set_key(keys::FIAT_ADDRESS, Value::from(on), true);
    }

    fn request_refresh(&mut self) {
        self.refreshes_requested += 1;
        debug!("fiat history refetch requested");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WalletConfig;

    fn service() -> FxService<WalletConfig> {
        FxService::new(Arc::new(Mutex::new(WalletConfig::new())))
    }

    #[test]
    fn history_filter_narrows_both_lists() {
        let fx = service();
        assert!(fx.currencies(false).contains(&"USDT".to_string()));
        assert!(!fx.currencies(true).contains(&"USDT".to_string()));

        let all = fx.exchanges_for("USD", false);
        let historical = fx.exchanges_for("USD", true);
        assert!(all.contains(&"Bittrex".to_string()));
        assert!(!historical.contains(&"Bittrex".to_string()));
        assert!(historical.contains(&"CoinGecko".to_string()));
    }

    #[test]
    fn disable_keeps_currency_selection() {
        let mut fx = service();
        fx.set_enabled(true);
        fx.set_currency("EUR");
        fx.set_enabled(false);
        assert!(!fx.is_enabled());
        assert_eq!(fx.currency(), "EUR");
    }

    #[test]
    fn refresh_requests_are_counted() {
        let mut fx = service();
        fx.request_refresh();
        fx.request_refresh();
        assert_eq!(fx.refreshes_requested(), 2);
    }
}
