//! Tab views for the preferences window.
//!
//! Pure view functions: read the panel snapshot, emit edit messages.

mod appearance;
mod assets;
mod fiat;
mod misc;
mod network;
mod transactions;

pub use appearance::view_appearance_tab;
pub use assets::view_assets_tab;
pub use fiat::view_fiat_tab;
pub use misc::view_misc_tab;
pub use network::view_network_tab;
pub use transactions::view_transactions_tab;
