//! Network tab: channels, routing, swaps, watchtower.

use iced::widget::{column, space};
use iced::Element;

use crate::gui::app::{Message, Panel};
use crate::gui::widgets;
use crate::settings::{SettingId, SettingsMessage};

pub fn view_network_tab(panel: &Panel) -> Element<'_, Message> {
    let s = panel.state();

    column![
        widgets::section_header("Network"),
        space().height(20.0),
        widgets::toggle_with_help(
            "Create recoverable channels",
            s.recoverable_channels,
            panel.is_enabled(SettingId::RecoverableChannels),
            "Add a backup hint to funding transactions so channels can be \
             recovered from seed.",
            |on| Message::Setting(SettingsMessage::RecoverableChannelsToggled(on)),
        ),
        space().height(12.0),
        widgets::toggle_with_help(
            "Use trampoline routing",
            s.trampoline_routing,
            panel.is_enabled(SettingId::TrampolineRouting),
            "Delegate route finding to a trampoline node instead of syncing \
             channel gossip locally.",
            |on| Message::Setting(SettingsMessage::TrampolineRoutingToggled(on)),
        ),
        space().height(12.0),
        widgets::toggle_switch(
            "Allow instant swaps",
            s.instant_swaps,
            panel.is_enabled(SettingId::InstantSwaps),
            |on| Message::Setting(SettingsMessage::InstantSwapsToggled(on)),
        ),
        space().height(12.0),
        widgets::toggle_with_help(
            "Use a remote watchtower",
            s.use_watchtower,
            panel.is_enabled(SettingId::UseWatchtower),
            "A watchtower watches your channels while this wallet is offline.",
            |on| Message::Setting(SettingsMessage::UseWatchtowerToggled(on)),
        ),
        widgets::labeled_row(
            "Watchtower URL:",
            160.0,
            widgets::url_input(
                &s.watchtower_url,
                "https://tower.example.org",
                panel.is_enabled(SettingId::WatchtowerUrl),
                |url| Message::Setting(SettingsMessage::WatchtowerUrlEdited(url)),
            ),
        ),
    ]
    .spacing(4)
    .padding(20)
    .into()
}
