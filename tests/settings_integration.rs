//! Settings panel integration tests
//!
//! Drives a full edit session through the panel against a real
//! file-backed config store and checks what lands on disk.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use corvid_wallet::assets::AssetFilter;
use corvid_wallet::config::{keys, ConfigStore, WalletConfig};
use corvid_wallet::events::{EventBus, Notification};
use corvid_wallet::services::fx::FxService;
use corvid_wallet::services::network::{Network, NetworkCommand};
use corvid_wallet::services::wallet::Wallet;
use corvid_wallet::settings::{SettingsMessage, SettingsPanel, Tab};
use corvid_wallet::units::BaseUnit;

type TestPanel = SettingsPanel<WalletConfig, Wallet, FxService<WalletConfig>, Network>;

struct Session {
    panel: TestPanel,
    config: Arc<Mutex<WalletConfig>>,
    net_rx: tokio::sync::mpsc::UnboundedReceiver<NetworkCommand>,
}

fn session(config: WalletConfig) -> Session {
    let (network, net_rx) = Network::channel();
    let config = Arc::new(Mutex::new(config));
    let wallet = Arc::new(Mutex::new(Wallet::new()));
    let fx = Arc::new(Mutex::new(FxService::new(config.clone())));
    let assets = Arc::new(Mutex::new(AssetFilter::new()));
    let panel = SettingsPanel::new(
        config.clone(),
        wallet,
        fx,
        Arc::new(network),
        assets,
        EventBus::new(),
    );
    Session {
        panel,
        config,
        net_rx,
    }
}

#[test]
fn edits_are_persisted_immediately_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut s = session(WalletConfig::load(&path).unwrap());

    s.panel
        .apply(SettingsMessage::BaseUnitChanged(BaseUnit::MilliKaw));
    s.panel.apply(SettingsMessage::NumZerosChanged(3));
    s.panel
        .apply(SettingsMessage::CoinChooserChanged("Random draw".into()));
    s.panel.apply(SettingsMessage::ThousandsSepToggled(true));

    // No close or save step; every edit already hit the file.
    let reloaded = WalletConfig::load(&path).unwrap();
    assert_eq!(reloaded.base_unit(), BaseUnit::MilliKaw);
    assert_eq!(reloaded.num_zeros(), 3);
    assert_eq!(reloaded.get_str(keys::COIN_CHOOSER), Some("Random draw"));
    assert!(reloaded.amount_thousands_sep());
}

#[test]
fn close_summary_reflects_whole_session() {
    let mut s = session(WalletConfig::new());

    s.panel
        .apply(SettingsMessage::ColorThemeChanged(corvid_wallet::settings::ColorTheme::Light));
    s.panel
        .apply(SettingsMessage::BlacklistEdited("^SPAM.*".into()));

    let summary = s.panel.close();
    assert!(summary.need_restart);
    assert!(summary.save_blacklist);
    assert!(!summary.save_whitelist);
}

#[test]
fn gossip_commands_reach_the_network_channel() {
    let mut s = session(WalletConfig::new());

    s.panel
        .apply(SettingsMessage::TrampolineRoutingToggled(false));
    s.panel
        .apply(SettingsMessage::TrampolineRoutingToggled(true));

    assert_eq!(s.net_rx.try_recv(), Ok(NetworkCommand::StartGossip));
    assert_eq!(s.net_rx.try_recv(), Ok(NetworkCommand::StopGossip));
    assert!(s.net_rx.try_recv().is_err());
}

#[test]
fn notifications_fan_out_to_subscribers() {
    let mut s = session(WalletConfig::new());
    let mut rx = s.panel.events().subscribe();

    s.panel
        .apply(SettingsMessage::BaseUnitChanged(BaseUnit::Sat));
    assert_eq!(rx.try_recv(), Ok(Notification::RefreshTabs));
    assert_eq!(rx.try_recv(), Ok(Notification::UpdateStatus));
}

#[test]
fn overrides_survive_a_whole_session() {
    let mut config = WalletConfig::new();
    config.set_override(keys::BASE_UNIT, Value::from("mKAW"));
    let mut s = session(config);

    assert_eq!(s.panel.state().base_unit, BaseUnit::MilliKaw);
    s.panel.apply(SettingsMessage::BaseUnitChanged(BaseUnit::Kaw));
    assert_eq!(s.config.lock().base_unit(), BaseUnit::MilliKaw);
}

#[test]
fn custom_explorer_roundtrips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut s = session(WalletConfig::load(&path).unwrap());

    s.panel.apply(SettingsMessage::BlockExplorerChanged(
        corvid_wallet::services::explorers::CUSTOM_ITEM.into(),
    ));
    s.panel.apply(SettingsMessage::BlockExplorerCustomEdited(
        "('https://x/', 'tx')".into(),
    ));

    let reloaded = WalletConfig::load(&path).unwrap();
    assert_eq!(
        corvid_wallet::services::explorers::block_explorer(&reloaded),
        None
    );
    assert_eq!(
        reloaded.get(keys::BLOCK_EXPLORER_CUSTOM),
        Some(&Value::Array(vec![
            Value::from("https://x/"),
            Value::from("tx")
        ]))
    );
}

#[test]
fn every_tab_renders_some_settings() {
    for tab in Tab::all() {
        assert!(!tab.settings().is_empty());
    }
}
