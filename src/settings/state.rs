//! Panel state: tabs, setting identities, and the view snapshot.

use crate::config::keys;
use crate::units::BaseUnit;

/// Tabs of the preferences dialog. Grouping is presentation-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Language, theme, and amount rendering.
    #[default]
    Appearance,
    /// Asset filtering.
    Assets,
    /// Spending policy and explorers.
    Transactions,
    /// Channels, gossip, swaps, watchtower.
    Network,
    /// Fiat overlay.
    Fiat,
    /// Everything else.
    Misc,
}

impl Tab {
    /// All tabs, in display order.
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Appearance,
            Tab::Assets,
            Tab::Transactions,
            Tab::Network,
            Tab::Fiat,
            Tab::Misc,
        ]
    }

    /// Tab label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Tab::Appearance => "Appearance",
            Tab::Assets => "Assets",
            Tab::Transactions => "Transactions",
            Tab::Network => "Network",
            Tab::Fiat => "Fiat",
            Tab::Misc => "Misc",
        }
    }

    /// The settings bound on this tab.
    pub fn settings(&self) -> Vec<SettingId> {
        SettingId::all()
            .iter()
            .copied()
            .filter(|id| id.tab() == *self)
            .collect()
    }
}

/// Identity of one option binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum SettingId {
    Language,
    ColorTheme,
    BaseUnit,
    NumZeros,
    ThousandsSep,
    ExtraPrecision,
    UseChange,
    MultipleChange,
    AdvancedPreview,
    ConfirmedOnly,
    OutputRounding,
    CoinChooser,
    OpReturnMessages,
    UseRbf,
    BatchRbf,
    BlockExplorer,
    BlockExplorerCustom,
    IpfsExplorer,
    IpfsExplorerCustom,
    RecoverableChannels,
    TrampolineRouting,
    InstantSwaps,
    UseWatchtower,
    WatchtowerUrl,
    FiatCurrency,
    FiatExchange,
    HistoryRates,
    CapitalGains,
    FiatAddresses,
    AssetBlacklist,
    AssetWhitelist,
    ShowHiddenAssets,
    AdvancedAssetOptions,
    CheckUpdates,
    LogToFile,
    DevNotifications,
}

impl SettingId {
    /// Every binding the panel owns.
    pub fn all() -> &'static [SettingId] {
        use SettingId::*;
        &[
            Language,
            ColorTheme,
            BaseUnit,
            NumZeros,
            ThousandsSep,
            ExtraPrecision,
            UseChange,
            MultipleChange,
            AdvancedPreview,
            ConfirmedOnly,
            OutputRounding,
            CoinChooser,
            OpReturnMessages,
            UseRbf,
            BatchRbf,
            BlockExplorer,
            BlockExplorerCustom,
            IpfsExplorer,
            IpfsExplorerCustom,
            RecoverableChannels,
            TrampolineRouting,
            InstantSwaps,
            UseWatchtower,
            WatchtowerUrl,
            FiatCurrency,
            FiatExchange,
            HistoryRates,
            CapitalGains,
            FiatAddresses,
            AssetBlacklist,
            AssetWhitelist,
            ShowHiddenAssets,
            AdvancedAssetOptions,
            CheckUpdates,
            LogToFile,
            DevNotifications,
        ]
    }

    /// The one tab this binding appears on.
    pub fn tab(&self) -> Tab {
        use SettingId::*;
        match self {
            Language | ColorTheme | BaseUnit | NumZeros | ThousandsSep | ExtraPrecision => {
                Tab::Appearance
            }
            AssetBlacklist | AssetWhitelist | ShowHiddenAssets | AdvancedAssetOptions => {
                Tab::Assets
            }
            UseChange | MultipleChange | AdvancedPreview | ConfirmedOnly | OutputRounding
            | CoinChooser | OpReturnMessages | UseRbf | BatchRbf | BlockExplorer
            | BlockExplorerCustom | IpfsExplorer | IpfsExplorerCustom => Tab::Transactions,
            RecoverableChannels | TrampolineRouting | InstantSwaps | UseWatchtower
            | WatchtowerUrl => Tab::Network,
            FiatCurrency | FiatExchange | HistoryRates | CapitalGains | FiatAddresses => Tab::Fiat,
            CheckUpdates | LogToFile | DevNotifications => Tab::Misc,
        }
    }

    /// The persisted config key, for lock checks. `None` for bindings
    /// that never touch the global config (window-level lists).
    pub fn config_key(&self) -> Option<&'static str> {
        use SettingId::*;
        match self {
            Language => Some(keys::LANGUAGE),
            ColorTheme => Some(keys::COLOR_THEME),
            BaseUnit => Some(keys::BASE_UNIT),
            NumZeros => Some(keys::NUM_ZEROS),
            ThousandsSep => Some(keys::AMT_THOUSANDS_SEP),
            ExtraPrecision => Some(keys::AMT_EXTRA_PRECISION),
            UseChange => Some(keys::USE_CHANGE),
            MultipleChange => Some(keys::MULTIPLE_CHANGE),
            AdvancedPreview => Some(keys::ADVANCED_PREVIEW),
            ConfirmedOnly => Some(keys::CONFIRMED_ONLY),
            OutputRounding => Some(keys::OUTPUT_ROUNDING),
            CoinChooser => Some(keys::COIN_CHOOSER),
            OpReturnMessages => Some(keys::OP_RETURN_MESSAGES),
            UseRbf => Some(keys::USE_RBF),
            BatchRbf => Some(keys::BATCH_RBF),
            BlockExplorer => Some(keys::BLOCK_EXPLORER),
            BlockExplorerCustom => Some(keys::BLOCK_EXPLORER_CUSTOM),
            IpfsExplorer => Some(keys::IPFS_EXPLORER),
            IpfsExplorerCustom => Some(keys::IPFS_EXPLORER_CUSTOM),
            RecoverableChannels => Some(keys::USE_RECOVERABLE_CHANNELS),
            TrampolineRouting => Some(keys::USE_GOSSIP),
            InstantSwaps => Some(keys::ALLOW_INSTANT_SWAPS),
            UseWatchtower => Some(keys::USE_WATCHTOWER),
            WatchtowerUrl => Some(keys::WATCHTOWER_URL),
            FiatCurrency => Some(keys::USE_EXCHANGE_RATE),
            FiatExchange => Some(keys::USE_EXCHANGE),
            HistoryRates => Some(keys::HISTORY_RATES),
            CapitalGains => Some(keys::HISTORY_CAPITAL_GAINS),
            FiatAddresses => Some(keys::FIAT_ADDRESS),
            AssetBlacklist | AssetWhitelist => None,
            ShowHiddenAssets => Some(keys::SHOW_SPAM_ASSETS),
            AdvancedAssetOptions => Some(keys::ADVANCED_ASSET_FUNCTIONS),
            CheckUpdates => Some(keys::CHECK_UPDATES),
            LogToFile => Some(keys::LOG_TO_FILE),
            DevNotifications => Some(keys::DEV_NOTIFICATIONS),
        }
    }
}

/// GUI color theme (restart required).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTheme {
    /// Light palette.
    Light,
    /// Dark palette.
    #[default]
    Dark,
}

impl ColorTheme {
    /// Both themes, in display order.
    pub fn all() -> &'static [ColorTheme] {
        &[ColorTheme::Light, ColorTheme::Dark]
    }

    /// Persisted config value.
    pub fn config_value(self) -> &'static str {
        match self {
            ColorTheme::Light => "default",
            ColorTheme::Dark => "dark",
        }
    }

    /// Theme for a persisted value, defaulting to dark.
    pub fn from_config(value: Option<&str>) -> ColorTheme {
        match value {
            Some("default") => ColorTheme::Light,
            _ => ColorTheme::Dark,
        }
    }
}

impl std::fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorTheme::Light => write!(f, "Light"),
            ColorTheme::Dark => write!(f, "Dark"),
        }
    }
}

/// One selectable GUI language.
#[derive(Debug, Clone, Copy)]
pub struct LanguageEntry {
    /// Locale code, also the persisted config value. Empty = system.
    pub code: &'static str,
    /// Native display name.
    pub name: &'static str,
}

/// Languages offered by the GUI.
pub const LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry { code: "", name: "Default" },
    LanguageEntry { code: "en_UK", name: "English" },
    LanguageEntry { code: "de_DE", name: "Deutsch" },
    LanguageEntry { code: "es_ES", name: "Español" },
    LanguageEntry { code: "fr_FR", name: "Français" },
    LanguageEntry { code: "ja_JP", name: "日本語" },
    LanguageEntry { code: "pt_BR", name: "Português" },
    LanguageEntry { code: "ru_RU", name: "Русский" },
    LanguageEntry { code: "zh_CN", name: "中文" },
];

/// Snapshot of everything a view needs to render the panel.
///
/// Built once from the current configuration at dialog open, then kept
/// in lockstep with the stores by [`SettingsPanel::apply`].
///
/// [`SettingsPanel::apply`]: crate::settings::SettingsPanel::apply
#[derive(Debug, Clone)]
pub struct PanelState {
    /// Selected language code.
    pub language: String,
    /// Selected color theme.
    pub color_theme: ColorTheme,
    /// Selected base unit.
    pub base_unit: BaseUnit,
    /// Zero padding after the decimal point.
    pub num_zeros: u8,
    /// Upper bound for `num_zeros` (the current decimal point).
    pub num_zeros_max: u8,
    /// Thousands separators in amounts.
    pub thousands_sep: bool,
    /// Extra post-satoshi amount precision.
    pub extra_precision: bool,

    /// Spend to change addresses.
    pub use_change: bool,
    /// Split change across multiple addresses.
    pub multiple_change: bool,
    /// Advanced transaction preview on pay.
    pub advanced_preview: bool,
    /// Spend only confirmed coins.
    pub confirmed_only: bool,
    /// Round change output values.
    pub output_rounding: bool,
    /// OP_RETURN message outputs.
    pub op_return_messages: bool,
    /// Replace-by-fee.
    pub use_rbf: bool,
    /// Batch RBF transactions.
    pub batch_rbf: bool,
    /// Coin-selection strategy names.
    pub coin_choosers: Vec<&'static str>,
    /// Selected strategy.
    pub coin_chooser: String,

    /// Block explorer names (custom entry last).
    pub block_explorers: Vec<&'static str>,
    /// Selected block explorer (or the custom entry).
    pub block_explorer: String,
    /// Custom block-explorer URL text.
    pub block_explorer_custom: String,
    /// Whether the custom block-explorer input is shown.
    pub block_explorer_custom_visible: bool,
    /// IPFS explorer names (custom entry last).
    pub ipfs_explorers: Vec<&'static str>,
    /// Selected IPFS explorer (or the custom entry).
    pub ipfs_explorer: String,
    /// Custom IPFS-explorer URL text.
    pub ipfs_explorer_custom: String,
    /// Whether the custom IPFS-explorer input is shown.
    pub ipfs_explorer_custom_visible: bool,

    /// Create recoverable channels.
    pub recoverable_channels: bool,
    /// Trampoline routing (gossip disabled).
    pub trampoline_routing: bool,
    /// Allow instant swaps.
    pub instant_swaps: bool,
    /// Use a remote watchtower.
    pub use_watchtower: bool,
    /// Remote watchtower URL text.
    pub watchtower_url: String,

    /// Offered fiat currency codes.
    pub fiat_currencies: Vec<String>,
    /// Selected fiat currency; `None` disables the overlay.
    pub fiat_currency: Option<String>,
    /// Exchange sources for the current currency/history mode.
    pub fiat_exchanges: Vec<String>,
    /// Selected exchange source, empty when unavailable.
    pub fiat_exchange: String,
    /// Historical fiat rates in the history view.
    pub history_rates: bool,
    /// Capital gains in the history view.
    pub capital_gains: bool,
    /// Fiat balances in the address list.
    pub fiat_addresses: bool,

    /// Blacklist editor text.
    pub blacklist_text: String,
    /// Whitelist editor text.
    pub whitelist_text: String,
    /// Show assets the blacklist hides.
    pub show_hidden_assets: bool,
    /// Advanced asset options enabled.
    pub advanced_asset_options: bool,
    /// Whether the dependent advanced asset controls are shown.
    pub advanced_asset_controls_visible: bool,

    /// Automatic update checks.
    pub check_updates: bool,
    /// Persist logs to disk.
    pub log_to_file: bool,
    /// Developer notifications.
    pub dev_notifications: bool,

    /// A change requiring a process restart was made.
    pub need_restart: bool,
    /// The blacklist was edited and must be persisted by the opener.
    pub save_blacklist: bool,
    /// The whitelist was edited and must be persisted by the opener.
    pub save_whitelist: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_binding_appears_on_exactly_one_tab() {
        let mut seen = 0usize;
        for tab in Tab::all() {
            seen += tab.settings().len();
        }
        assert_eq!(seen, SettingId::all().len());
    }

    #[test]
    fn color_theme_roundtrips_through_config() {
        for theme in ColorTheme::all() {
            assert_eq!(ColorTheme::from_config(Some(theme.config_value())), *theme);
        }
        assert_eq!(ColorTheme::from_config(None), ColorTheme::Dark);
    }
}
