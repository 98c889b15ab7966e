//! Visual theme for the preferences window.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

/// Neutral base with a blue accent.
pub mod colors {
    use iced::Color;

    pub const PRIMARY: Color = Color::from_rgb(0.2, 0.4, 0.8);
    pub const PRIMARY_LIGHT: Color = Color::from_rgb(0.4, 0.6, 0.9);
    pub const PRIMARY_DARK: Color = Color::from_rgb(0.1, 0.3, 0.6);

    pub const SURFACE: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const SURFACE_DARK: Color = Color::from_rgb(0.96, 0.96, 0.98);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.1, 0.1, 0.15);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.4, 0.4, 0.5);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.6, 0.6, 0.65);

    pub const WARNING: Color = Color::from_rgb(0.9, 0.6, 0.0);
    pub const INFO: Color = Color::from_rgb(0.2, 0.5, 0.9);

    pub const TAB_ACTIVE: Color = PRIMARY;
    pub const TAB_HOVER: Color = PRIMARY_LIGHT;
}

pub fn tab_button_style(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let base_bg = if active {
            colors::TAB_ACTIVE
        } else {
            Color::TRANSPARENT
        };
        let text_color = if active {
            Color::WHITE
        } else {
            colors::TEXT_SECONDARY
        };

        let base = button::Style {
            background: Some(Background::Color(base_bg)),
            text_color,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 6.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        };

        match status {
            button::Status::Active => base,
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(if active {
                    colors::TAB_ACTIVE
                } else {
                    colors::TAB_HOVER
                })),
                text_color: Color::WHITE,
                ..base
            },
            button::Status::Pressed => button::Style {
                background: Some(Background::Color(colors::PRIMARY_DARK)),
                text_color: Color::WHITE,
                ..base
            },
            button::Status::Disabled => base,
        }
    }
}

pub fn section_container_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::SURFACE)),
        border: Border {
            color: Color::from_rgb(0.88, 0.88, 0.9),
            width: 1.0,
            radius: 8.0.into(),
        },
        text_color: Some(colors::TEXT_PRIMARY),
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 4.0,
        },
        snap: false,
    }
}
