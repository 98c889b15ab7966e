//! Headless preferences panel.
//!
//! The panel follows the Elm shape used elsewhere in the GUI: a state
//! snapshot, a message enum, and a single `apply` that owns every side
//! effect. Views stay dumb; any frontend that can render [`PanelState`]
//! and emit [`SettingsMessage`] gets identical behavior.

mod message;
mod panel;
mod state;

pub use message::SettingsMessage;
pub use panel::{CloseSummary, SettingsPanel};
pub use state::{ColorTheme, LanguageEntry, PanelState, SettingId, Tab, LANGUAGES};
