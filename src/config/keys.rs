//! Config key constants.
//!
//! Every persisted setting is addressed by one of these string keys.
//! Key names are part of the on-disk format and must stay stable.

/// GUI language code (restart required).
pub const LANGUAGE: &str = "language";
/// GUI color theme, `"default"` or `"dark"` (restart required).
pub const COLOR_THEME: &str = "color_theme";
/// Base display unit ticker.
pub const BASE_UNIT: &str = "base_unit";
/// Zeros padded after the decimal point, bounded by the decimal point.
pub const NUM_ZEROS: &str = "num_zeros";
/// Add thousands separators to coin amounts.
pub const AMT_THOUSANDS_SEP: &str = "amt_add_thousands_sep";
/// Render amounts with extra post-satoshi precision.
pub const AMT_EXTRA_PRECISION: &str = "amt_extra_precision";

/// Open the advanced transaction preview dialog on pay.
pub const ADVANCED_PREVIEW: &str = "advanced_preview";
/// Spend only confirmed inputs.
pub const CONFIRMED_ONLY: &str = "confirmed_only";
/// Round the change output to the precision of the other outputs.
pub const OUTPUT_ROUNDING: &str = "coin_chooser_output_rounding";
/// Named UTXO selection strategy.
pub const COIN_CHOOSER: &str = "coin_chooser";
/// Allow OP_RETURN message outputs.
pub const OP_RETURN_MESSAGES: &str = "enable_op_return_messages";
/// Mark transactions replaceable (RBF).
pub const USE_RBF: &str = "use_rbf";
/// Consolidate unconfirmed transactions when bumping fees.
pub const BATCH_RBF: &str = "batch_rbf";

/// Named block explorer, exclusive with [`BLOCK_EXPLORER_CUSTOM`].
pub const BLOCK_EXPLORER: &str = "block_explorer";
/// Custom block explorer URL (string or URL-template tuple).
pub const BLOCK_EXPLORER_CUSTOM: &str = "block_explorer_custom";
/// Named IPFS explorer, exclusive with [`IPFS_EXPLORER_CUSTOM`].
pub const IPFS_EXPLORER: &str = "ipfs_explorer";
/// Custom IPFS explorer URL (string or URL-template tuple).
pub const IPFS_EXPLORER_CUSTOM: &str = "ipfs_explorer_custom";

/// Create recoverable channels.
pub const USE_RECOVERABLE_CHANNELS: &str = "use_recoverable_channels";
/// Run channel gossip (inverse of trampoline routing).
pub const USE_GOSSIP: &str = "use_gossip";
/// Complete reverse swaps before funding confirmation.
pub const ALLOW_INSTANT_SWAPS: &str = "allow_instant_swaps";
/// Report channel states to a remote watchtower.
pub const USE_WATCHTOWER: &str = "use_watchtower";
/// Remote watchtower URL.
pub const WATCHTOWER_URL: &str = "watchtower_url";

/// Fiat overlay enabled.
pub const USE_EXCHANGE_RATE: &str = "use_exchange_rate";
/// Fiat currency code.
pub const CURRENCY: &str = "currency";
/// Fiat exchange-rate source.
pub const USE_EXCHANGE: &str = "use_exchange";
/// Show historical fiat rates in the history view.
pub const HISTORY_RATES: &str = "history_rates";
/// Show capital gains in the history view.
pub const HISTORY_CAPITAL_GAINS: &str = "history_rates_capital_gains";
/// Show fiat balances in the address list.
pub const FIAT_ADDRESS: &str = "fiat_address";

/// Show assets hidden by the blacklist.
pub const SHOW_SPAM_ASSETS: &str = "show_spam_assets";
/// Enable the advanced asset workspace controls.
pub const ADVANCED_ASSET_FUNCTIONS: &str = "advanced_asset_functions";

/// Automatically check for software updates.
pub const CHECK_UPDATES: &str = "check_updates";
/// Persist debug logs to disk (restart required).
pub const LOG_TO_FILE: &str = "log_to_file";
/// Show developer notifications in the message list.
pub const DEV_NOTIFICATIONS: &str = "get_dev_notifications";

/// Wallet-local: spend to change addresses.
pub const USE_CHANGE: &str = "use_change";
/// Wallet-local: split change across multiple addresses.
pub const MULTIPLE_CHANGE: &str = "multiple_change";
