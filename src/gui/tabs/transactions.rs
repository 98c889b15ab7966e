//! Transactions tab: spending policy, coin selection, explorers.

use iced::widget::{column, pick_list, space};
use iced::{Element, Length};

use crate::gui::app::{Message, Panel};
use crate::gui::widgets;
use crate::services::coin_chooser::COIN_CHOOSERS;
use crate::settings::{SettingId, SettingsMessage};

pub fn view_transactions_tab(panel: &Panel) -> Element<'_, Message> {
    let s = panel.state();

    let chooser_help = COIN_CHOOSERS
        .iter()
        .find(|c| c.name == s.coin_chooser)
        .map(|c| c.description)
        .unwrap_or("");

    let mut content = column![
        widgets::section_header("Transactions"),
        space().height(20.0),
        widgets::toggle_with_help(
            "Use change addresses",
            s.use_change,
            panel.is_enabled(SettingId::UseChange),
            "Send the change back to a dedicated change address of this wallet.",
            |on| Message::Setting(SettingsMessage::UseChangeToggled(on)),
        ),
        widgets::toggle_with_help(
            "Use multiple change addresses",
            s.multiple_change,
            panel.is_enabled(SettingId::MultipleChange),
            "Spread the change over several addresses to improve privacy.",
            |on| Message::Setting(SettingsMessage::MultipleChangeToggled(on)),
        ),
        space().height(12.0),
        widgets::toggle_switch(
            "Advanced preview before sending",
            s.advanced_preview,
            panel.is_enabled(SettingId::AdvancedPreview),
            |on| Message::Setting(SettingsMessage::AdvancedPreviewToggled(on)),
        ),
        widgets::toggle_switch(
            "Spend only confirmed coins",
            s.confirmed_only,
            panel.is_enabled(SettingId::ConfirmedOnly),
            |on| Message::Setting(SettingsMessage::ConfirmedOnlyToggled(on)),
        ),
        widgets::toggle_switch(
            "Enable output value rounding",
            s.output_rounding,
            panel.is_enabled(SettingId::OutputRounding),
            |on| Message::Setting(SettingsMessage::OutputRoundingToggled(on)),
        ),
        widgets::toggle_switch(
            "Enable OP_RETURN messages",
            s.op_return_messages,
            panel.is_enabled(SettingId::OpReturnMessages),
            |on| Message::Setting(SettingsMessage::OpReturnMessagesToggled(on)),
        ),
        space().height(12.0),
        widgets::toggle_with_help(
            "Use replace-by-fee",
            s.use_rbf,
            panel.is_enabled(SettingId::UseRbf),
            "Mark new transactions replaceable so their fee can be bumped later.",
            |on| Message::Setting(SettingsMessage::UseRbfToggled(on)),
        ),
        widgets::toggle_switch(
            "Batch RBF transactions",
            s.batch_rbf,
            panel.is_enabled(SettingId::BatchRbf),
            |on| Message::Setting(SettingsMessage::BatchRbfToggled(on)),
        ),
        space().height(12.0),
        widgets::labeled_row(
            "Coin selection:",
            160.0,
            pick_list(s.coin_choosers.clone(), Some(s.coin_chooser.as_str()), |name| {
                Message::Setting(SettingsMessage::CoinChooserChanged(name.to_string()))
            })
            .width(Length::Fixed(200.0))
            .into(),
        ),
        widgets::help_text(chooser_help),
        space().height(12.0),
        widgets::labeled_row(
            "Block explorer:",
            160.0,
            pick_list(
                s.block_explorers.clone(),
                Some(s.block_explorer.as_str()),
                |name| Message::Setting(SettingsMessage::BlockExplorerChanged(name.to_string())),
            )
            .width(Length::Fixed(200.0))
            .into(),
        ),
    ]
    .spacing(4)
    .padding(20);

    if s.block_explorer_custom_visible {
        content = content.push(widgets::url_input(
            &s.block_explorer_custom,
            "https://example.org/tx/",
            true,
            |text| Message::Setting(SettingsMessage::BlockExplorerCustomEdited(text)),
        ));
    }

    content = content
        .push(space().height(12.0))
        .push(widgets::labeled_row(
            "IPFS gateway:",
            160.0,
            pick_list(
                s.ipfs_explorers.clone(),
                Some(s.ipfs_explorer.as_str()),
                |name| Message::Setting(SettingsMessage::IpfsExplorerChanged(name.to_string())),
            )
            .width(Length::Fixed(200.0))
            .into(),
        ));

    if s.ipfs_explorer_custom_visible {
        content = content.push(widgets::url_input(
            &s.ipfs_explorer_custom,
            "https://ipfs.io/ipfs/",
            true,
            |text| Message::Setting(SettingsMessage::IpfsExplorerCustomEdited(text)),
        ));
    }

    content.into()
}
