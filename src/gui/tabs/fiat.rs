//! Fiat tab: currency, exchange source, history display.

use iced::widget::{column, pick_list, space};
use iced::{Element, Length};

use crate::gui::app::{Message, Panel};
use crate::gui::widgets;
use crate::settings::{SettingId, SettingsMessage};

/// Combo entry that disables the fiat overlay.
const NONE_ITEM: &str = "None";

pub fn view_fiat_tab(panel: &Panel) -> Element<'_, Message> {
    let s = panel.state();

    let mut currencies: Vec<String> = vec![NONE_ITEM.to_string()];
    currencies.extend(s.fiat_currencies.iter().cloned());
    let selected_currency = s
        .fiat_currency
        .clone()
        .unwrap_or_else(|| NONE_ITEM.to_string());

    let selected_exchange = if s.fiat_exchange.is_empty() {
        None
    } else {
        Some(s.fiat_exchange.clone())
    };

    column![
        widgets::section_header("Fiat"),
        space().height(20.0),
        widgets::labeled_row(
            "Fiat currency:",
            160.0,
            pick_list(currencies, Some(selected_currency), |ccy| {
                let selection = if ccy == NONE_ITEM { None } else { Some(ccy) };
                Message::Setting(SettingsMessage::FiatCurrencyChanged(selection))
            })
            .width(Length::Fixed(200.0))
            .into(),
        ),
        widgets::labeled_row(
            "Source:",
            160.0,
            pick_list(s.fiat_exchanges.clone(), selected_exchange, |name| {
                Message::Setting(SettingsMessage::FiatExchangeChanged(name))
            })
            .width(Length::Fixed(200.0))
            .into(),
        ),
        space().height(12.0),
        widgets::toggle_switch(
            "Show history rates",
            s.history_rates,
            panel.is_enabled(SettingId::HistoryRates),
            |on| Message::Setting(SettingsMessage::HistoryRatesToggled(on)),
        ),
        widgets::toggle_switch(
            "Show capital gains in history",
            s.capital_gains,
            panel.is_enabled(SettingId::CapitalGains),
            |on| Message::Setting(SettingsMessage::CapitalGainsToggled(on)),
        ),
        widgets::toggle_switch(
            "Show fiat balance for addresses",
            s.fiat_addresses,
            panel.is_enabled(SettingId::FiatAddresses),
            |on| Message::Setting(SettingsMessage::FiatAddressesToggled(on)),
        ),
    ]
    .spacing(4)
    .padding(20)
    .into()
}
