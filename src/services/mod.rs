//! Collaborator services and registries.
//!
//! The settings panel never reaches into wallet, network, or exchange
//! internals; it depends on the capability traits defined here and on
//! the static registries of named strategies and explorers.

pub mod coin_chooser;
pub mod explorers;
pub mod fx;
pub mod network;
pub mod wallet;

pub use coin_chooser::{chooser_from_config, chooser_names, CoinChooser, COIN_CHOOSERS};
pub use explorers::{
    block_explorer, block_explorer_names, ipfs_explorer, ipfs_explorer_names, parse_custom_entry,
    Explorer, CUSTOM_ITEM,
};
pub use fx::{FiatService, FxService};
pub use network::{Network, NetworkCommand, NetworkControl};
pub use wallet::{Wallet, WalletDb, WalletSettings};
