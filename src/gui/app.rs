//! Main iced application for the preferences window.
//!
//! Elm Architecture: State -> View -> Message -> Update -> State. The
//! state is the [`SettingsPanel`]; the update loop forwards edits to it
//! and tracks which tab is showing.

use std::sync::Arc;

use iced::widget::{button, column, container, row, scrollable, space, text};
use iced::{Alignment, Element, Length, Task, Theme};
use parking_lot::Mutex;
use tracing::info;

use crate::assets::AssetFilter;
use crate::config::WalletConfig;
use crate::events::EventBus;
use crate::services::fx::FxService;
use crate::services::network::Network;
use crate::services::wallet::Wallet;
use crate::settings::{ColorTheme, SettingsMessage, SettingsPanel, Tab};
use crate::gui::tabs;
use crate::gui::theme as app_theme;
use crate::gui::widgets;

/// Panel instantiation used by the GUI binary.
pub type Panel = SettingsPanel<WalletConfig, Wallet, FxService<WalletConfig>, Network>;

/// Top-level GUI messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// Tab bar navigation.
    TabSelected(Tab),
    /// A panel edit from one of the tab views.
    Setting(SettingsMessage),
    /// Close button pressed.
    CloseRequested,
}

pub struct SettingsApp {
    pub panel: Panel,
    pub current_tab: Tab,
}

impl SettingsApp {
    /// Build the panel over the given config and spawn the network
    /// task. Must run inside a tokio runtime.
    pub fn new(config: WalletConfig) -> (Self, Task<Message>) {
        let events = EventBus::new();
        let network = Arc::new(Network::spawn(events.clone()));
        let config = Arc::new(Mutex::new(config));
        let fx = Arc::new(Mutex::new(FxService::new(config.clone())));
        let wallet = Arc::new(Mutex::new(Wallet::new()));
        let assets = Arc::new(Mutex::new(AssetFilter::new()));
        let panel = SettingsPanel::new(config, wallet, fx, network, assets, events);
        (
            Self {
                panel,
                current_tab: Tab::Appearance,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        let restart = if self.panel.state().need_restart {
            " (restart required)"
        } else {
            ""
        };
        format!("Corvid Wallet Preferences{restart}")
    }

    pub fn theme(&self) -> Theme {
        match self.panel.state().color_theme {
            ColorTheme::Light => Theme::Light,
            ColorTheme::Dark => Theme::Dark,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.current_tab = tab;
                Task::none()
            }
            Message::Setting(msg) => {
                let was_pending = self.panel.state().need_restart;
                self.panel.apply(msg);
                if !was_pending && self.panel.state().need_restart {
                    info!("a change requiring restart was made");
                }
                Task::none()
            }
            Message::CloseRequested => {
                if self.panel.state().need_restart {
                    info!("closing; restart the wallet to apply pending changes");
                }
                iced::exit()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let tab_bar = self.view_tab_bar();
        let content = scrollable(self.view_tab_content()).height(Length::Fill);
        let footer = self.view_footer();

        column![tab_bar, content, footer,].spacing(0).into()
    }

    fn view_tab_bar(&self) -> Element<'_, Message> {
        let buttons: Vec<Element<'_, Message>> = Tab::all()
            .iter()
            .map(|&tab| {
                let is_active = self.current_tab == tab;
                button(text(tab.display_name()))
                    .on_press(Message::TabSelected(tab))
                    .padding([8, 16])
                    .style(app_theme::tab_button_style(is_active))
                    .into()
            })
            .collect();

        container(
            row(buttons)
                .spacing(4)
                .padding([8, 20])
                .align_y(Alignment::Center),
        )
        .style(|_theme| container::Style {
            background: Some(iced::Background::Color(app_theme::colors::SURFACE_DARK)),
            ..Default::default()
        })
        .width(Length::Fill)
        .into()
    }

    fn view_tab_content(&self) -> Element<'_, Message> {
        let content = match self.current_tab {
            Tab::Appearance => tabs::view_appearance_tab(&self.panel),
            Tab::Assets => tabs::view_assets_tab(&self.panel),
            Tab::Transactions => tabs::view_transactions_tab(&self.panel),
            Tab::Network => tabs::view_network_tab(&self.panel),
            Tab::Fiat => tabs::view_fiat_tab(&self.panel),
            Tab::Misc => tabs::view_misc_tab(&self.panel),
        };

        container(content)
            .style(app_theme::section_container_style)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_footer(&self) -> Element<'_, Message> {
        let restart_banner: Element<'_, Message> = if self.panel.state().need_restart {
            widgets::warning_box("Please restart Corvid Wallet to activate the new settings")
        } else {
            space().width(Length::Fill).into()
        };

        container(
            row![
                restart_banner,
                space().width(Length::Fill),
                button(text("Close"))
                    .on_press(Message::CloseRequested)
                    .padding([6, 12]),
            ]
            .spacing(8)
            .align_y(Alignment::Center)
            .padding([8, 20]),
        )
        .width(Length::Fill)
        .into()
    }
}
