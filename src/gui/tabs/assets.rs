//! Assets tab: blacklist/whitelist editors and asset display options.

use iced::widget::{column, space, text};
use iced::Element;

use crate::gui::app::{Message, Panel};
use crate::gui::widgets;
use crate::settings::{SettingId, SettingsMessage};

pub fn view_assets_tab(panel: &Panel) -> Element<'_, Message> {
    let s = panel.state();

    let mut content = column![
        widgets::section_header("Assets"),
        space().height(20.0),
        text("Asset blacklist (one regular expression per line):").size(14),
        widgets::line_list_input(&s.blacklist_text, "^SPAM.*", |t| {
            Message::Setting(SettingsMessage::BlacklistEdited(t))
        }),
        widgets::help_text("Assets matching any pattern are hidden from the asset list."),
        space().height(12.0),
        text("Asset whitelist (exceptions to the blacklist):").size(14),
        widgets::line_list_input(&s.whitelist_text, "^MYASSET$", |t| {
            Message::Setting(SettingsMessage::WhitelistEdited(t))
        }),
        space().height(12.0),
        widgets::toggle_switch(
            "Show hidden assets",
            s.show_hidden_assets,
            panel.is_enabled(SettingId::ShowHiddenAssets),
            |on| Message::Setting(SettingsMessage::ShowHiddenAssetsToggled(on)),
        ),
        widgets::toggle_with_help(
            "Enable advanced asset options",
            s.advanced_asset_options,
            panel.is_enabled(SettingId::AdvancedAssetOptions),
            "Shows issuance and reissuance controls in the asset view.",
            |on| Message::Setting(SettingsMessage::AdvancedAssetOptionsToggled(on)),
        ),
    ]
    .spacing(4)
    .padding(20);

    if s.advanced_asset_controls_visible {
        content = content.push(widgets::info_box(
            "Advanced asset controls are visible in the asset view.",
        ));
    }

    content.into()
}
