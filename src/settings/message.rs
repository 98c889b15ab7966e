//! Edit messages accepted by the settings panel.

use crate::settings::state::ColorTheme;
use crate::units::BaseUnit;

/// One user edit on the preferences panel.
///
/// Every variant maps to exactly one control. The panel applies the
/// side effects; views only construct these.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsMessage {
    // ---- Appearance -------------------------------------------------
    /// Language selector changed.
    LanguageChanged(String),
    /// Color theme selector changed.
    ColorThemeChanged(ColorTheme),
    /// Base display unit changed.
    BaseUnitChanged(BaseUnit),
    /// Zero-padding spinner changed.
    NumZerosChanged(u8),
    /// Thousands-separator checkbox toggled.
    ThousandsSepToggled(bool),
    /// Extra-precision checkbox toggled.
    ExtraPrecisionToggled(bool),

    // ---- Transactions -----------------------------------------------
    /// Use-change checkbox toggled.
    UseChangeToggled(bool),
    /// Multiple-change checkbox toggled.
    MultipleChangeToggled(bool),
    /// Advanced-preview checkbox toggled.
    AdvancedPreviewToggled(bool),
    /// Confirmed-only checkbox toggled.
    ConfirmedOnlyToggled(bool),
    /// Output-rounding checkbox toggled.
    OutputRoundingToggled(bool),
    /// Coin-selection strategy changed.
    CoinChooserChanged(String),
    /// OP_RETURN messages checkbox toggled.
    OpReturnMessagesToggled(bool),
    /// Replace-by-fee checkbox toggled.
    UseRbfToggled(bool),
    /// Batch-RBF checkbox toggled.
    BatchRbfToggled(bool),
    /// Block explorer selector changed (may select the custom entry).
    BlockExplorerChanged(String),
    /// Custom block-explorer URL edited.
    BlockExplorerCustomEdited(String),
    /// IPFS explorer selector changed (may select the custom entry).
    IpfsExplorerChanged(String),
    /// Custom IPFS-explorer URL edited.
    IpfsExplorerCustomEdited(String),

    // ---- Network ----------------------------------------------------
    /// Recoverable-channels checkbox toggled.
    RecoverableChannelsToggled(bool),
    /// Trampoline-routing checkbox toggled. On means gossip off.
    TrampolineRoutingToggled(bool),
    /// Instant-swaps checkbox toggled.
    InstantSwapsToggled(bool),
    /// Watchtower checkbox toggled.
    UseWatchtowerToggled(bool),
    /// Watchtower URL edited.
    WatchtowerUrlEdited(String),

    // ---- Fiat -------------------------------------------------------
    /// Fiat currency changed; `None` disables the overlay.
    FiatCurrencyChanged(Option<String>),
    /// Exchange-rate source changed.
    FiatExchangeChanged(String),
    /// History-rates checkbox toggled.
    HistoryRatesToggled(bool),
    /// Capital-gains checkbox toggled.
    CapitalGainsToggled(bool),
    /// Fiat-addresses checkbox toggled.
    FiatAddressesToggled(bool),

    // ---- Assets -----------------------------------------------------
    /// Blacklist editor text changed.
    BlacklistEdited(String),
    /// Whitelist editor text changed.
    WhitelistEdited(String),
    /// Show-hidden-assets checkbox toggled.
    ShowHiddenAssetsToggled(bool),
    /// Advanced asset options checkbox toggled.
    AdvancedAssetOptionsToggled(bool),

    // ---- Misc -------------------------------------------------------
    /// Update-check checkbox toggled.
    CheckUpdatesToggled(bool),
    /// Log-to-file checkbox toggled.
    LogToFileToggled(bool),
    /// Developer-notifications checkbox toggled.
    DevNotificationsToggled(bool),
}
