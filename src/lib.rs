//! # corvid-wallet
//!
//! Preferences subsystem for the Corvid desktop wallet.
//!
//! The crate is built around a single headless component, the settings
//! panel: a tabbed set of option bindings over a persistent JSON
//! configuration store and a handful of collaborator services (wallet,
//! fiat exchange client, network control, strategy registries). Every
//! edit is written immediately; there is no staged apply step. The
//! optional `gui` feature renders the panel with iced.
//!
//! # Architecture
//!
//! ```text
//! corvid-wallet
//!   ├─> WalletConfig (JSON key/value store, override layer)
//!   ├─> Collaborators (WalletSettings, FiatService, NetworkControl)
//!   ├─> Registries (coin choosers, block/IPFS explorers)
//!   ├─> SettingsPanel (message dispatch, side effects, restart flag)
//!   ├─> EventBus (opaque broadcast notifications to sibling views)
//!   └─> iced GUI (feature "gui": tabbed dialog over the panel)
//! ```
//!
//! # Data Flow
//!
//! **Edit path:** user input → `SettingsMessage` → `SettingsPanel::apply`
//! → config/collaborator write → broadcast notification
//!
//! **Close path:** `SettingsPanel::close` → `CloseSummary` (restart
//! needed, asset-list save flags) reported to the opener.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Asset blacklist/whitelist regex filter
pub mod assets;

/// Wallet configuration store
pub mod config;

/// Outbound notification bus
pub mod events;

/// Tracing initialization
pub mod logging;

/// Collaborator services and registries
pub mod services;

/// The settings panel engine
pub mod settings;

/// Base units and amount rendering
pub mod units;

/// iced preferences dialog
#[cfg(feature = "gui")]
pub mod gui;
