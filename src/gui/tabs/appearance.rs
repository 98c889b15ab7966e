//! Appearance tab: language, theme, and amount rendering.

use iced::widget::{column, pick_list, space};
use iced::{Element, Length};

use crate::gui::app::{Message, Panel};
use crate::gui::widgets;
use crate::settings::{ColorTheme, SettingId, SettingsMessage, LANGUAGES};
use crate::units::BaseUnit;

pub fn view_appearance_tab(panel: &Panel) -> Element<'_, Message> {
    let s = panel.state();

    let language_names: Vec<&'static str> = LANGUAGES.iter().map(|l| l.name).collect();
    let selected_language = LANGUAGES
        .iter()
        .find(|l| l.code == s.language)
        .map(|l| l.name);

    column![
        widgets::section_header("Appearance"),
        space().height(20.0),
        widgets::labeled_row(
            "Language:",
            160.0,
            pick_list(language_names, selected_language, |name| {
                let code = LANGUAGES
                    .iter()
                    .find(|l| l.name == name)
                    .map(|l| l.code)
                    .unwrap_or("");
                Message::Setting(SettingsMessage::LanguageChanged(code.to_string()))
            })
            .width(Length::Fixed(200.0))
            .into(),
        ),
        widgets::help_text("Select which language is used in the GUI (after restart)."),
        space().height(12.0),
        widgets::labeled_row(
            "Color theme:",
            160.0,
            pick_list(ColorTheme::all().to_vec(), Some(s.color_theme), |theme| {
                Message::Setting(SettingsMessage::ColorThemeChanged(theme))
            })
            .width(Length::Fixed(200.0))
            .into(),
        ),
        widgets::help_text("Takes effect after restart."),
        space().height(12.0),
        widgets::labeled_row(
            "Base unit:",
            160.0,
            pick_list(BaseUnit::all().to_vec(), Some(s.base_unit), |unit| {
                Message::Setting(SettingsMessage::BaseUnitChanged(unit))
            })
            .width(Length::Fixed(200.0))
            .into(),
        ),
        widgets::help_text("Base unit for displayed amounts; existing amounts are preserved."),
        space().height(12.0),
        widgets::labeled_row(
            "Zeros after decimal point:",
            160.0,
            widgets::bounded_slider(s.num_zeros, s.num_zeros_max, |v| {
                Message::Setting(SettingsMessage::NumZerosChanged(v))
            }),
        ),
        space().height(12.0),
        widgets::toggle_switch(
            "Add thousand separators to coin amounts",
            s.thousands_sep,
            panel.is_enabled(SettingId::ThousandsSep),
            |on| Message::Setting(SettingsMessage::ThousandsSepToggled(on)),
        ),
        widgets::toggle_switch(
            "Show amounts with extra precision",
            s.extra_precision,
            panel.is_enabled(SettingId::ExtraPrecision),
            |on| Message::Setting(SettingsMessage::ExtraPrecisionToggled(on)),
        ),
    ]
    .spacing(4)
    .padding(20)
    .into()
}
