//! Misc tab: updates, logging, notifications.

use iced::widget::{column, space};
use iced::Element;

use crate::gui::app::{Message, Panel};
use crate::gui::widgets;
use crate::settings::{SettingId, SettingsMessage};

pub fn view_misc_tab(panel: &Panel) -> Element<'_, Message> {
    let s = panel.state();

    column![
        widgets::section_header("Misc"),
        space().height(20.0),
        widgets::toggle_switch(
            "Automatically check for software updates",
            s.check_updates,
            panel.is_enabled(SettingId::CheckUpdates),
            |on| Message::Setting(SettingsMessage::CheckUpdatesToggled(on)),
        ),
        widgets::toggle_with_help(
            "Write logs to file",
            s.log_to_file,
            panel.is_enabled(SettingId::LogToFile),
            "Debug logs may contain private information. Takes effect after restart.",
            |on| Message::Setting(SettingsMessage::LogToFileToggled(on)),
        ),
        widgets::toggle_switch(
            "Show developer notifications",
            s.dev_notifications,
            panel.is_enabled(SettingId::DevNotifications),
            |on| Message::Setting(SettingsMessage::DevNotificationsToggled(on)),
        ),
    ]
    .spacing(4)
    .padding(20)
    .into()
}
