//! The settings panel engine.
//!
//! [`SettingsPanel`] owns a [`PanelState`] snapshot and applies
//! [`SettingsMessage`] edits against the shared stores. Every side
//! effect of an edit happens here; views render the snapshot and feed
//! edits back, nothing more. Edits on disabled or locked controls are
//! ignored rather than rejected.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use crate::assets::AssetFilter;
use crate::config::{keys, ConfigStore};
use crate::events::{EventBus, Notification};
use crate::services::explorers;
use crate::services::fx::{self, FiatService};
use crate::services::network::NetworkControl;
use crate::services::wallet::WalletSettings;
use crate::services::coin_chooser;
use crate::settings::message::SettingsMessage;
use crate::settings::state::{ColorTheme, PanelState, SettingId};

/// What the opener must act on once the dialog closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CloseSummary {
    /// A restart-required setting changed; prompt the user.
    pub need_restart: bool,
    /// The asset blacklist was edited and must be persisted.
    pub save_blacklist: bool,
    /// The asset whitelist was edited and must be persisted.
    pub save_whitelist: bool,
}

/// Headless preferences panel over the wallet's stores.
pub struct SettingsPanel<C, W, F, N>
where
    C: ConfigStore,
    W: WalletSettings,
    F: FiatService,
    N: NetworkControl,
{
    config: Arc<Mutex<C>>,
    wallet: Arc<Mutex<W>>,
    fx: Arc<Mutex<F>>,
    network: Arc<N>,
    assets: Arc<Mutex<AssetFilter>>,
    events: EventBus,
    state: PanelState,
}

impl<C, W, F, N> SettingsPanel<C, W, F, N>
where
    C: ConfigStore,
    W: WalletSettings,
    F: FiatService,
    N: NetworkControl,
{
    /// Snapshot the stores and build the panel.
    pub fn new(
        config: Arc<Mutex<C>>,
        wallet: Arc<Mutex<W>>,
        fx: Arc<Mutex<F>>,
        network: Arc<N>,
        assets: Arc<Mutex<AssetFilter>>,
        events: EventBus,
    ) -> Self {
        // The fiat service locks the config itself, so the config guard
        // must be dropped before the fiat block below.
        let mut state = {
            let cfg = config.lock();
            let wallet = wallet.lock();
            let assets = assets.lock();
            let block_explorer = explorers::block_explorer(&*cfg);
            let ipfs_explorer = explorers::ipfs_explorer(&*cfg);
            PanelState {
                language: cfg.language(),
                color_theme: ColorTheme::from_config(Some(&cfg.color_theme())),
                base_unit: cfg.base_unit(),
                num_zeros: cfg.num_zeros(),
                num_zeros_max: cfg.decimal_point(),
                thousands_sep: cfg.amount_thousands_sep(),
                extra_precision: cfg.amount_extra_precision(),

                use_change: wallet.use_change(),
                multiple_change: wallet.multiple_change(),
                advanced_preview: cfg.get_bool(keys::ADVANCED_PREVIEW, false),
                confirmed_only: cfg.get_bool(keys::CONFIRMED_ONLY, false),
                output_rounding: cfg.get_bool(keys::OUTPUT_ROUNDING, false),
                op_return_messages: cfg.get_bool(keys::OP_RETURN_MESSAGES, false),
                use_rbf: cfg.get_bool(keys::USE_RBF, true),
                batch_rbf: cfg.get_bool(keys::BATCH_RBF, false),
                coin_choosers: coin_chooser::chooser_names(),
                coin_chooser: coin_chooser::chooser_from_config(&*cfg).name.to_string(),

                block_explorers: explorers::block_explorer_names(),
                block_explorer: block_explorer.unwrap_or(explorers::CUSTOM_ITEM).to_string(),
                block_explorer_custom: cfg
                    .get(keys::BLOCK_EXPLORER_CUSTOM)
                    .map(explorers::custom_entry_text)
                    .unwrap_or_default(),
                block_explorer_custom_visible: block_explorer.is_none(),
                ipfs_explorers: explorers::ipfs_explorer_names(),
                ipfs_explorer: ipfs_explorer.unwrap_or(explorers::CUSTOM_ITEM).to_string(),
                ipfs_explorer_custom: cfg
                    .get(keys::IPFS_EXPLORER_CUSTOM)
                    .map(explorers::custom_entry_text)
                    .unwrap_or_default(),
                ipfs_explorer_custom_visible: ipfs_explorer.is_none(),

                recoverable_channels: cfg.get_bool(keys::USE_RECOVERABLE_CHANNELS, true),
                trampoline_routing: !cfg.get_bool(keys::USE_GOSSIP, false),
                instant_swaps: cfg.get_bool(keys::ALLOW_INSTANT_SWAPS, false),
                use_watchtower: cfg.get_bool(keys::USE_WATCHTOWER, false),
                watchtower_url: cfg
                    .get_str(keys::WATCHTOWER_URL)
                    .unwrap_or_default()
                    .to_string(),

                fiat_currencies: Vec::new(),
                fiat_currency: None,
                fiat_exchanges: Vec::new(),
                fiat_exchange: String::new(),
                history_rates: false,
                capital_gains: false,
                fiat_addresses: false,

                blacklist_text: assets.blacklist_lines().join("\n"),
                whitelist_text: assets.whitelist_lines().join("\n"),
                show_hidden_assets: cfg.get_bool(keys::SHOW_SPAM_ASSETS, false),
                advanced_asset_options: cfg.get_bool(keys::ADVANCED_ASSET_FUNCTIONS, false),
                advanced_asset_controls_visible: cfg
                    .get_bool(keys::ADVANCED_ASSET_FUNCTIONS, false),

                check_updates: cfg.get_bool(keys::CHECK_UPDATES, false),
                log_to_file: cfg.log_to_file(),
                dev_notifications: cfg.get_bool(keys::DEV_NOTIFICATIONS, true),

                need_restart: false,
                save_blacklist: false,
                save_whitelist: false,
            }
        };
        {
            let fx_svc = fx.lock();
            state.fiat_currency = fx_svc.is_enabled().then(|| fx_svc.currency());
            state.fiat_addresses = fx_svc.fiat_addresses();
            refresh_fiat(&mut state, &*fx_svc);
        }
        Self {
            config,
            wallet,
            fx,
            network,
            assets,
            events,
            state,
        }
    }

    /// The current view snapshot.
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// The outbound notification bus.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Whether the control for `id` accepts edits right now.
    ///
    /// False when the backing config key is locked by an override, or
    /// when a controlling sibling setting turns the control off.
    pub fn is_enabled(&self, id: SettingId) -> bool {
        if let Some(key) = id.config_key() {
            if !self.config.lock().is_modifiable(key) {
                return false;
            }
        }
        match id {
            SettingId::MultipleChange => self.state.use_change,
            SettingId::BatchRbf => self.state.use_rbf,
            SettingId::WatchtowerUrl => self.state.use_watchtower,
            SettingId::FiatExchange | SettingId::HistoryRates => {
                self.state.fiat_currency.is_some()
            }
            SettingId::CapitalGains => {
                self.state.fiat_currency.is_some() && self.state.history_rates
            }
            _ => true,
        }
    }

    /// Consume the panel and report what the opener must still do.
    pub fn close(self) -> CloseSummary {
        CloseSummary {
            need_restart: self.state.need_restart,
            save_blacklist: self.state.save_blacklist,
            save_whitelist: self.state.save_whitelist,
        }
    }

    /// Apply one edit, with all of its side effects.
    pub fn apply(&mut self, msg: SettingsMessage) {
        match msg {
            // ---- Appearance -----------------------------------------
            SettingsMessage::LanguageChanged(code) => {
                if !self.is_enabled(SettingId::Language) {
                    return;
                }
                {
                    let mut cfg = self.config.lock();
                    if cfg.language() != code {
                        cfg.set_key(keys::LANGUAGE, Value::from(code.as_str()), true);
                        self.state.need_restart = true;
                    }
                }
                self.state.language = code;
            }
            SettingsMessage::ColorThemeChanged(theme) => {
                if !self.is_enabled(SettingId::ColorTheme) {
                    return;
                }
                {
                    let mut cfg = self.config.lock();
                    if ColorTheme::from_config(Some(&cfg.color_theme())) != theme {
                        cfg.set_key(keys::COLOR_THEME, Value::from(theme.config_value()), true);
                        self.state.need_restart = true;
                    }
                }
                self.state.color_theme = theme;
            }
            SettingsMessage::BaseUnitChanged(unit) => {
                if !self.is_enabled(SettingId::BaseUnit) {
                    return;
                }
                {
                    let mut cfg = self.config.lock();
                    if cfg.base_unit() == unit {
                        return;
                    }
                    cfg.set_base_unit(unit);
                    self.state.num_zeros = cfg.num_zeros();
                    self.state.num_zeros_max = cfg.decimal_point();
                }
                self.state.base_unit = unit;
                self.events.notify(Notification::RefreshTabs);
                self.events.notify(Notification::UpdateStatus);
            }
            SettingsMessage::NumZerosChanged(value) => {
                if !self.is_enabled(SettingId::NumZeros) {
                    return;
                }
                {
                    let mut cfg = self.config.lock();
                    let value = value.min(cfg.decimal_point());
                    self.state.num_zeros = value;
                    if cfg.num_zeros() == value {
                        return;
                    }
                    cfg.set_key(keys::NUM_ZEROS, Value::from(value), true);
                }
                self.events.notify(Notification::RefreshTabs);
            }
            SettingsMessage::ThousandsSepToggled(on) => {
                if !self.is_enabled(SettingId::ThousandsSep) {
                    return;
                }
                self.state.thousands_sep = on;
                self.config
                    .lock()
                    .set_key(keys::AMT_THOUSANDS_SEP, Value::from(on), true);
                self.events.notify(Notification::RefreshTabs);
            }
            SettingsMessage::ExtraPrecisionToggled(on) => {
                if !self.is_enabled(SettingId::ExtraPrecision) {
                    return;
                }
                self.state.extra_precision = on;
                self.config
                    .lock()
                    .set_key(keys::AMT_EXTRA_PRECISION, Value::from(on), true);
                self.events.notify(Notification::RefreshTabs);
            }

            // ---- Transactions ---------------------------------------
            SettingsMessage::UseChangeToggled(on) => {
                if !self.is_enabled(SettingId::UseChange) {
                    return;
                }
                let mut wallet = self.wallet.lock();
                if wallet.use_change() != on {
                    wallet.set_use_change(on);
                }
                self.state.use_change = on;
            }
            SettingsMessage::MultipleChangeToggled(on) => {
                if !self.is_enabled(SettingId::MultipleChange) {
                    return;
                }
                let mut wallet = self.wallet.lock();
                if wallet.multiple_change() != on {
                    wallet.set_multiple_change(on);
                }
                self.state.multiple_change = on;
            }
            SettingsMessage::AdvancedPreviewToggled(on) => {
                self.set_bool(SettingId::AdvancedPreview, keys::ADVANCED_PREVIEW, on);
                self.state.advanced_preview = on;
            }
            SettingsMessage::ConfirmedOnlyToggled(on) => {
                self.set_bool(SettingId::ConfirmedOnly, keys::CONFIRMED_ONLY, on);
                self.state.confirmed_only = on;
            }
            SettingsMessage::OutputRoundingToggled(on) => {
                self.set_bool(SettingId::OutputRounding, keys::OUTPUT_ROUNDING, on);
                self.state.output_rounding = on;
            }
            SettingsMessage::CoinChooserChanged(name) => {
                if !self.is_enabled(SettingId::CoinChooser) {
                    return;
                }
                self.config
                    .lock()
                    .set_key(keys::COIN_CHOOSER, Value::from(name.as_str()), true);
                self.state.coin_chooser = name;
            }
            SettingsMessage::OpReturnMessagesToggled(on) => {
                self.set_bool(SettingId::OpReturnMessages, keys::OP_RETURN_MESSAGES, on);
                self.state.op_return_messages = on;
            }
            SettingsMessage::UseRbfToggled(on) => {
                self.set_bool(SettingId::UseRbf, keys::USE_RBF, on);
                self.state.use_rbf = on;
            }
            SettingsMessage::BatchRbfToggled(on) => {
                if !self.is_enabled(SettingId::BatchRbf) {
                    return;
                }
                self.config
                    .lock()
                    .set_key(keys::BATCH_RBF, Value::from(on), true);
                self.state.batch_rbf = on;
            }
            SettingsMessage::BlockExplorerChanged(name) => {
                if !self.is_enabled(SettingId::BlockExplorer) {
                    return;
                }
                {
                    let mut cfg = self.config.lock();
                    if name == explorers::CUSTOM_ITEM {
                        let stored =
                            explorers::parse_custom_entry(&self.state.block_explorer_custom);
                        cfg.set_key(keys::BLOCK_EXPLORER_CUSTOM, stored, true);
                        self.state.block_explorer_custom_visible = true;
                    } else {
                        cfg.set_key(keys::BLOCK_EXPLORER_CUSTOM, Value::Null, false);
                        cfg.set_key(keys::BLOCK_EXPLORER, Value::from(name.as_str()), true);
                        self.state.block_explorer_custom_visible = false;
                    }
                }
                self.state.block_explorer = name;
            }
            SettingsMessage::BlockExplorerCustomEdited(text) => {
                if self.state.block_explorer_custom_visible {
                    self.config.lock().set_key(
                        keys::BLOCK_EXPLORER_CUSTOM,
                        explorers::parse_custom_entry(&text),
                        true,
                    );
                }
                self.state.block_explorer_custom = text;
            }
            SettingsMessage::IpfsExplorerChanged(name) => {
                if !self.is_enabled(SettingId::IpfsExplorer) {
                    return;
                }
                {
                    let mut cfg = self.config.lock();
                    if name == explorers::CUSTOM_ITEM {
                        let stored =
                            explorers::parse_custom_entry(&self.state.ipfs_explorer_custom);
                        cfg.set_key(keys::IPFS_EXPLORER_CUSTOM, stored, true);
                        self.state.ipfs_explorer_custom_visible = true;
                    } else {
                        cfg.set_key(keys::IPFS_EXPLORER_CUSTOM, Value::Null, false);
                        cfg.set_key(keys::IPFS_EXPLORER, Value::from(name.as_str()), true);
                        self.state.ipfs_explorer_custom_visible = false;
                    }
                }
                self.state.ipfs_explorer = name;
            }
            SettingsMessage::IpfsExplorerCustomEdited(text) => {
                if self.state.ipfs_explorer_custom_visible {
                    self.config.lock().set_key(
                        keys::IPFS_EXPLORER_CUSTOM,
                        explorers::parse_custom_entry(&text),
                        true,
                    );
                }
                self.state.ipfs_explorer_custom = text;
            }

            // ---- Network --------------------------------------------
            SettingsMessage::RecoverableChannelsToggled(on) => {
                self.set_bool(
                    SettingId::RecoverableChannels,
                    keys::USE_RECOVERABLE_CHANNELS,
                    on,
                );
                self.state.recoverable_channels = on;
            }
            SettingsMessage::TrampolineRoutingToggled(trampoline) => {
                if !self.is_enabled(SettingId::TrampolineRouting) {
                    return;
                }
                let gossip = !trampoline;
                self.config
                    .lock()
                    .set_key(keys::USE_GOSSIP, Value::from(gossip), true);
                if gossip {
                    self.network.start_gossip();
                } else {
                    self.network.stop_gossip();
                }
                self.state.trampoline_routing = trampoline;
                self.events.notify(Notification::GossipSyncProgress);
                self.events.notify(Notification::ChannelsUpdated);
            }
            SettingsMessage::InstantSwapsToggled(on) => {
                self.set_bool(SettingId::InstantSwaps, keys::ALLOW_INSTANT_SWAPS, on);
                self.state.instant_swaps = on;
            }
            SettingsMessage::UseWatchtowerToggled(on) => {
                self.set_bool(SettingId::UseWatchtower, keys::USE_WATCHTOWER, on);
                self.state.use_watchtower = on;
            }
            SettingsMessage::WatchtowerUrlEdited(url) => {
                if !self.is_enabled(SettingId::WatchtowerUrl) {
                    return;
                }
                let value = if url.is_empty() {
                    Value::Null
                } else {
                    Value::from(url.as_str())
                };
                self.config.lock().set_key(keys::WATCHTOWER_URL, value, true);
                self.state.watchtower_url = url;
            }

            // ---- Fiat -----------------------------------------------
            SettingsMessage::FiatCurrencyChanged(selection) => {
                if !self.is_enabled(SettingId::FiatCurrency) {
                    return;
                }
                {
                    let mut fx_svc = self.fx.lock();
                    fx_svc.set_enabled(selection.is_some());
                    if let Some(ccy) = &selection {
                        if *ccy != fx_svc.currency() {
                            fx_svc.set_currency(ccy);
                        }
                    }
                    self.state.fiat_currency = selection;
                    refresh_fiat(&mut self.state, &*fx_svc);
                }
                self.events.notify(Notification::FiatUpdated);
                self.events.notify(Notification::HistoryRefreshed);
            }
            SettingsMessage::FiatExchangeChanged(name) => {
                if !self.is_enabled(SettingId::FiatExchange) {
                    return;
                }
                {
                    let mut fx_svc = self.fx.lock();
                    if !name.is_empty() && name != fx_svc.exchange() {
                        fx_svc.set_exchange(&name);
                    }
                }
                self.state.fiat_exchange = name;
                self.events.notify(Notification::FiatUpdated);
            }
            SettingsMessage::HistoryRatesToggled(on) => {
                if !self.is_enabled(SettingId::HistoryRates) {
                    return;
                }
                {
                    let mut fx_svc = self.fx.lock();
                    fx_svc.set_history_rates(on);
                    if on {
                        // Historical rates were likely never fetched.
                        fx_svc.request_refresh();
                    }
                    refresh_fiat(&mut self.state, &*fx_svc);
                }
                self.events.notify(Notification::HistoryRefreshed);
            }
            SettingsMessage::CapitalGainsToggled(on) => {
                if !self.is_enabled(SettingId::CapitalGains) {
                    return;
                }
                self.fx.lock().set_capital_gains(on);
                self.state.capital_gains = on;
                self.events.notify(Notification::HistoryRefreshed);
            }
            SettingsMessage::FiatAddressesToggled(on) => {
                if !self.is_enabled(SettingId::FiatAddresses) {
                    return;
                }
                self.fx.lock().set_fiat_addresses(on);
                self.state.fiat_addresses = on;
                self.events.notify(Notification::RefreshTabs);
            }

            // ---- Assets ---------------------------------------------
            SettingsMessage::BlacklistEdited(text) => {
                self.assets.lock().set_blacklist(&text);
                self.state.blacklist_text = text;
                self.state.save_blacklist = true;
                self.events.notify(Notification::AssetListUpdated);
            }
            SettingsMessage::WhitelistEdited(text) => {
                self.assets.lock().set_whitelist(&text);
                self.state.whitelist_text = text;
                self.state.save_whitelist = true;
                self.events.notify(Notification::AssetListUpdated);
            }
            SettingsMessage::ShowHiddenAssetsToggled(on) => {
                self.set_bool(SettingId::ShowHiddenAssets, keys::SHOW_SPAM_ASSETS, on);
                self.state.show_hidden_assets = on;
                self.events.notify(Notification::AssetListUpdated);
                self.events.notify(Notification::HistoryRefreshed);
            }
            SettingsMessage::AdvancedAssetOptionsToggled(on) => {
                self.set_bool(
                    SettingId::AdvancedAssetOptions,
                    keys::ADVANCED_ASSET_FUNCTIONS,
                    on,
                );
                self.state.advanced_asset_options = on;
                self.state.advanced_asset_controls_visible = on;
                self.events.notify(Notification::AssetListUpdated);
            }

            // ---- Misc -----------------------------------------------
            SettingsMessage::CheckUpdatesToggled(on) => {
                self.set_bool(SettingId::CheckUpdates, keys::CHECK_UPDATES, on);
                self.state.check_updates = on;
            }
            SettingsMessage::LogToFileToggled(on) => {
                if !self.is_enabled(SettingId::LogToFile) {
                    return;
                }
                {
                    let mut cfg = self.config.lock();
                    if cfg.log_to_file() != on {
                        cfg.set_key(keys::LOG_TO_FILE, Value::from(on), true);
                        self.state.need_restart = true;
                    }
                }
                self.state.log_to_file = on;
            }
            SettingsMessage::DevNotificationsToggled(on) => {
                self.set_bool(SettingId::DevNotifications, keys::DEV_NOTIFICATIONS, on);
                self.state.dev_notifications = on;
                self.events.notify(Notification::UpdateStatus);
            }
        }
    }

    // Plain boolean key write behind the enablement check. Callers
    // update their own state field afterwards.
    fn set_bool(&mut self, id: SettingId, key: &str, on: bool) {
        if !self.is_enabled(id) {
            return;
        }
        self.config.lock().set_key(key, Value::from(on), true);
    }
}

// Re-derive the fiat-dependent parts of the snapshot from the service.
fn refresh_fiat(state: &mut PanelState, fx_svc: &dyn FiatService) {
    state.history_rates = fx_svc.history_rates();
    state.capital_gains = fx_svc.capital_gains();
    state.fiat_currencies = fx_svc.currencies(state.history_rates);
    state.fiat_exchanges = if fx_svc.is_enabled() {
        fx_svc.exchanges_for(&fx_svc.currency(), state.history_rates)
    } else {
        fx_svc.exchanges_for(fx::DEFAULT_CURRENCY, false)
    };
    let current = fx_svc.exchange();
    state.fiat_exchange = if state.fiat_exchanges.contains(&current) {
        current
    } else {
        String::new()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WalletConfig;
    use crate::services::fx::FxService;
    use crate::services::network::MockNetworkControl;
    use crate::services::wallet::Wallet;
    use crate::units::BaseUnit;

    type TestPanel =
        SettingsPanel<WalletConfig, Wallet, FxService<WalletConfig>, MockNetworkControl>;

    struct Fixture {
        panel: TestPanel,
        config: Arc<Mutex<WalletConfig>>,
        fx: Arc<Mutex<FxService<WalletConfig>>>,
        wallet: Arc<Mutex<Wallet>>,
    }

    fn fixture() -> Fixture {
        fixture_with(MockNetworkControl::new(), WalletConfig::new())
    }

    fn fixture_with(net: MockNetworkControl, config: WalletConfig) -> Fixture {
        let config = Arc::new(Mutex::new(config));
        let wallet = Arc::new(Mutex::new(Wallet::new()));
        let fx = Arc::new(Mutex::new(FxService::new(config.clone())));
        let assets = Arc::new(Mutex::new(AssetFilter::new()));
        let panel = SettingsPanel::new(
            config.clone(),
            wallet.clone(),
            fx.clone(),
            Arc::new(net),
            assets,
            EventBus::new(),
        );
        Fixture {
            panel,
            config,
            fx,
            wallet,
        }
    }

    #[test]
    fn num_zeros_reclamped_when_unit_shrinks() {
        let mut f = fixture();
        f.panel.apply(SettingsMessage::NumZerosChanged(5));
        assert_eq!(f.panel.state().num_zeros, 5);

        f.panel
            .apply(SettingsMessage::BaseUnitChanged(BaseUnit::MicroKaw));
        assert_eq!(f.panel.state().num_zeros, 2);
        assert_eq!(f.panel.state().num_zeros_max, 2);
        assert_eq!(f.config.lock().num_zeros(), 2);
    }

    #[test]
    fn num_zeros_clamped_to_current_unit() {
        let mut f = fixture();
        f.panel
            .apply(SettingsMessage::BaseUnitChanged(BaseUnit::MilliKaw));
        f.panel.apply(SettingsMessage::NumZerosChanged(9));
        assert_eq!(f.panel.state().num_zeros, 5);
    }

    #[test]
    fn multiple_change_follows_use_change() {
        let mut f = fixture();
        assert!(f.panel.is_enabled(SettingId::MultipleChange));

        f.panel.apply(SettingsMessage::UseChangeToggled(false));
        assert!(!f.panel.is_enabled(SettingId::MultipleChange));

        // Edits on the disabled control are ignored, not deferred.
        f.panel.apply(SettingsMessage::MultipleChangeToggled(true));
        assert!(!f.panel.state().multiple_change);
        assert!(!f.wallet.lock().multiple_change());
    }

    #[test]
    fn custom_explorer_is_mutually_exclusive_with_named() {
        let mut f = fixture();
        f.panel.apply(SettingsMessage::BlockExplorerChanged(
            explorers::CUSTOM_ITEM.into(),
        ));
        assert!(f.panel.state().block_explorer_custom_visible);

        f.panel.apply(SettingsMessage::BlockExplorerCustomEdited(
            "https://my-explorer/".into(),
        ));
        assert_eq!(
            f.config.lock().get(keys::BLOCK_EXPLORER_CUSTOM),
            Some(&Value::from("https://my-explorer/"))
        );

        f.panel
            .apply(SettingsMessage::BlockExplorerChanged("kawscan.io".into()));
        assert!(f.config.lock().get(keys::BLOCK_EXPLORER_CUSTOM).is_none());
        assert_eq!(
            f.config.lock().get_str(keys::BLOCK_EXPLORER),
            Some("kawscan.io")
        );
        assert!(!f.panel.state().block_explorer_custom_visible);
    }

    #[test]
    fn custom_tuple_text_is_stored_as_parts() {
        let mut f = fixture();
        f.panel.apply(SettingsMessage::IpfsExplorerChanged(
            explorers::CUSTOM_ITEM.into(),
        ));
        f.panel.apply(SettingsMessage::IpfsExplorerCustomEdited(
            "('https://gw/', 'ipfs')".into(),
        ));
        assert_eq!(
            f.config.lock().get(keys::IPFS_EXPLORER_CUSTOM),
            Some(&Value::Array(vec![
                Value::from("https://gw/"),
                Value::from("ipfs")
            ]))
        );
    }

    #[test]
    fn custom_edit_ignored_while_named_explorer_selected() {
        let mut f = fixture();
        f.panel.apply(SettingsMessage::BlockExplorerCustomEdited(
            "https://stale/".into(),
        ));
        assert!(f.config.lock().get(keys::BLOCK_EXPLORER_CUSTOM).is_none());
    }

    #[test]
    fn disabling_fiat_keeps_stored_currency() {
        let mut f = fixture();
        f.panel
            .apply(SettingsMessage::FiatCurrencyChanged(Some("EUR".into())));
        assert!(f.fx.lock().is_enabled());

        f.panel.apply(SettingsMessage::FiatCurrencyChanged(None));
        assert!(!f.fx.lock().is_enabled());
        assert_eq!(f.config.lock().get_str(keys::CURRENCY), Some("EUR"));
        assert!(!f.panel.is_enabled(SettingId::HistoryRates));
        assert!(!f.panel.is_enabled(SettingId::CapitalGains));
    }

    #[test]
    fn history_toggle_restricts_exchanges_and_requests_refetch() {
        let mut f = fixture();
        f.panel
            .apply(SettingsMessage::FiatCurrencyChanged(Some("USD".into())));
        assert!(f
            .panel
            .state()
            .fiat_exchanges
            .contains(&"Bittrex".to_string()));

        f.panel.apply(SettingsMessage::HistoryRatesToggled(true));
        assert!(!f
            .panel
            .state()
            .fiat_exchanges
            .contains(&"Bittrex".to_string()));
        assert!(f
            .panel
            .state()
            .fiat_exchanges
            .contains(&"CoinGecko".to_string()));
        assert_eq!(f.fx.lock().refreshes_requested(), 1);
        assert!(f.panel.is_enabled(SettingId::CapitalGains));
    }

    #[test]
    fn capital_gains_needs_history_rates() {
        let mut f = fixture();
        f.panel
            .apply(SettingsMessage::FiatCurrencyChanged(Some("USD".into())));
        assert!(!f.panel.is_enabled(SettingId::CapitalGains));
        f.panel.apply(SettingsMessage::CapitalGainsToggled(true));
        assert!(!f.panel.state().capital_gains);
    }

    #[test]
    fn restart_flag_accumulates_and_survives_reverts() {
        let mut f = fixture();
        f.panel
            .apply(SettingsMessage::LanguageChanged("de_DE".into()));
        assert!(f.panel.state().need_restart);

        // Reverting does not clear the flag.
        f.panel.apply(SettingsMessage::LanguageChanged("".into()));
        f.panel.apply(SettingsMessage::LogToFileToggled(false));
        let summary = f.panel.close();
        assert!(summary.need_restart);
    }

    #[test]
    fn unchanged_language_does_not_flag_restart() {
        let mut f = fixture();
        f.panel.apply(SettingsMessage::LanguageChanged("".into()));
        assert!(!f.panel.state().need_restart);
    }

    #[test]
    fn locked_key_disables_and_ignores_edits() {
        let mut config = WalletConfig::new();
        config.set_override(keys::LANGUAGE, Value::from("de_DE"));
        let mut f = fixture_with(MockNetworkControl::new(), config);
        assert!(!f.panel.is_enabled(SettingId::Language));

        f.panel
            .apply(SettingsMessage::LanguageChanged("fr_FR".into()));
        assert_eq!(f.panel.state().language, "de_DE");
        assert_eq!(f.config.lock().language(), "de_DE");
    }

    #[test]
    fn trampoline_toggle_drives_gossip() {
        let mut net = MockNetworkControl::new();
        net.expect_start_gossip().times(1).return_const(());
        net.expect_stop_gossip().times(1).return_const(());
        let mut f = fixture_with(net, WalletConfig::new());

        f.panel
            .apply(SettingsMessage::TrampolineRoutingToggled(false));
        assert!(f.config.lock().get_bool(keys::USE_GOSSIP, false));

        f.panel.apply(SettingsMessage::TrampolineRoutingToggled(true));
        assert!(!f.config.lock().get_bool(keys::USE_GOSSIP, true));
    }

    #[test]
    fn batch_rbf_follows_use_rbf() {
        let mut f = fixture();
        f.panel.apply(SettingsMessage::UseRbfToggled(false));
        assert!(!f.panel.is_enabled(SettingId::BatchRbf));
        f.panel.apply(SettingsMessage::BatchRbfToggled(true));
        assert!(!f.panel.state().batch_rbf);
    }

    #[test]
    fn list_edits_set_save_flags() {
        let mut f = fixture();
        f.panel
            .apply(SettingsMessage::BlacklistEdited("^SPAM.*".into()));
        f.panel
            .apply(SettingsMessage::WhitelistEdited("^SPAMLESS$".into()));
        let summary = f.panel.close();
        assert!(summary.save_blacklist);
        assert!(summary.save_whitelist);
        assert!(!summary.need_restart);
    }

    #[test]
    fn watchtower_url_requires_checkbox() {
        let mut f = fixture();
        f.panel
            .apply(SettingsMessage::WatchtowerUrlEdited("https://wt/".into()));
        assert!(f.config.lock().get(keys::WATCHTOWER_URL).is_none());

        f.panel.apply(SettingsMessage::UseWatchtowerToggled(true));
        f.panel
            .apply(SettingsMessage::WatchtowerUrlEdited("https://wt/".into()));
        assert_eq!(f.config.lock().get_str(keys::WATCHTOWER_URL), Some("https://wt/"));
    }

    #[test]
    fn edits_emit_notifications() {
        let mut f = fixture();
        let mut rx = f.panel.events().subscribe();
        f.panel.apply(SettingsMessage::ThousandsSepToggled(true));
        assert_eq!(rx.try_recv(), Ok(Notification::RefreshTabs));
    }
}
