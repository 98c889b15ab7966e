//! Widget helpers composing iced primitives into consistent form rows.
//!
//! Centralizes styling so the tab views focus purely on layout. The
//! `enabled` flags map to iced's convention that a control without an
//! `on_*` handler renders disabled.

use iced::widget::{container, pick_list, row, slider, text, text_input, toggler};
use iced::{Alignment, Element, Length};

use crate::gui::app::Message;
use crate::gui::theme;

pub fn section_header(title: &str) -> Element<'_, Message> {
    text(title)
        .size(20)
        .style(|_theme| text::Style {
            color: Some(theme::colors::PRIMARY),
        })
        .into()
}

pub fn labeled_row<'a>(
    label: &'a str,
    label_width: f32,
    widget: Element<'a, Message>,
) -> Element<'a, Message> {
    row![text(label).width(Length::Fixed(label_width)), widget,]
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
}

pub fn toggle_switch<'a>(
    label: &'a str,
    value: bool,
    enabled: bool,
    on_toggle: impl Fn(bool) -> Message + 'a,
) -> Element<'a, Message> {
    let mut switch = toggler(value);
    if enabled {
        switch = switch.on_toggle(on_toggle);
    }
    row![text(label).width(Length::Fill), switch,]
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
}

pub fn toggle_with_help<'a>(
    label: &'a str,
    value: bool,
    enabled: bool,
    help_text: &'a str,
    on_toggle: impl Fn(bool) -> Message + 'a,
) -> Element<'a, Message> {
    iced::widget::column![
        toggle_switch(label, value, enabled, on_toggle),
        text(format!("ⓘ {}", help_text))
            .size(12)
            .style(|_theme| text::Style {
                color: Some(theme::colors::TEXT_MUTED),
            }),
    ]
    .spacing(4)
    .into()
}

pub fn dropdown<'a, T>(
    options: Vec<T>,
    selected: Option<T>,
    on_select: impl Fn(T) -> Message + 'a,
) -> Element<'a, Message>
where
    T: ToString + PartialEq + Clone + 'a,
{
    pick_list(options, selected, on_select)
        .placeholder("Select...")
        .width(Length::Fixed(200.0))
        .into()
}

pub fn bounded_slider<'a>(
    value: u8,
    max: u8,
    on_change: impl Fn(u8) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        slider(0..=max as u32, value as u32, move |v| on_change(v as u8))
            .width(Length::FillPortion(3)),
        text(format!("{value}"))
            .width(Length::FillPortion(1))
            .align_x(iced::alignment::Horizontal::Right),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

pub fn url_input<'a>(
    value: &'a str,
    placeholder: &'a str,
    enabled: bool,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let mut input = text_input(placeholder, value).width(Length::Fill);
    if enabled {
        input = input.on_input(on_change);
    }
    input.into()
}

/// iced lacks native multi-line input; wraps single-line with newline
/// separators rendered as `;` until multi-line support lands.
pub fn line_list_input<'a>(
    value: &'a str,
    placeholder: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    text_input(placeholder, value)
        .on_input(on_change)
        .width(Length::Fill)
        .into()
}

pub fn help_text(content: &str) -> Element<'_, Message> {
    text(format!("ⓘ {}", content))
        .size(12)
        .style(|_theme| text::Style {
            color: Some(theme::colors::TEXT_MUTED),
        })
        .into()
}

pub fn warning_box(text_content: &str) -> Element<'_, Message> {
    container(
        row![text("⚠").size(16), text(text_content).size(13),]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .padding([8, 12])
    .style(|_theme| container::Style {
        background: Some(iced::Background::Color(
            theme::colors::WARNING.scale_alpha(0.1),
        )),
        border: iced::Border {
            color: theme::colors::WARNING.scale_alpha(0.3),
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    })
    .into()
}

pub fn info_box(text_content: &str) -> Element<'_, Message> {
    container(
        row![text("ⓘ").size(16), text(text_content).size(13),]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .padding([8, 12])
    .style(|_theme| container::Style {
        background: Some(iced::Background::Color(
            theme::colors::INFO.scale_alpha(0.1),
        )),
        border: iced::Border {
            color: theme::colors::INFO.scale_alpha(0.3),
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    })
    .into()
}
