//! Preferences GUI built on iced's Elm Architecture.
//!
//! Thin rendering layer over [`crate::settings::SettingsPanel`]: views
//! read the panel's state snapshot and emit [`crate::settings::SettingsMessage`]
//! edits back through the app update loop. All binding logic stays in
//! the panel.

#![allow(missing_docs)]

pub mod app;
pub mod tabs;
pub mod theme;
pub mod widgets;
