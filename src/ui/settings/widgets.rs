// SPDX-License-Identifier: MPL-2.0
//! Shared row builders for the settings content panels.

use super::Message;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, column, row, text, toggler, Space};
use iced::{Alignment, Element, Length};

/// Section heading at the top of a content panel.
pub fn section_title<'a>(label: &'a str, is_dark: bool) -> Element<'a, Message> {
    text(label)
        .size(typography::TITLE_SM)
        .color(theme::text_primary(is_dark))
        .into()
}

/// A labeled toggler row with an optional description underneath.
pub fn toggle_row<'a>(
    label: &'a str,
    description: &'a str,
    value: bool,
    is_dark: bool,
    on_toggle: impl Fn(bool) -> Message + 'a,
) -> Element<'a, Message> {
    let mut labels = column![text(label)
        .size(typography::BODY_LG)
        .color(theme::text_primary(is_dark))]
    .spacing(spacing::XXS);

    if !description.is_empty() {
        labels = labels.push(
            text(description)
                .size(typography::BODY)
                .color(theme::text_muted()),
        );
    }

    row![
        labels,
        Space::new().width(Length::Fill),
        toggler(value).on_toggle(on_toggle).size(sizing::TOGGLER),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// A row of mutually exclusive choice buttons.
///
/// Exactly one entry renders with the selected style; pressing any entry
/// emits the message built from its value.
pub fn choice_row<'a, T>(
    label: &'a str,
    choices: &'a [T],
    selected: T,
    is_dark: bool,
    display: impl Fn(T) -> String,
    on_choose: impl Fn(T) -> Message,
) -> Element<'a, Message>
where
    T: Copy + PartialEq,
{
    let mut buttons = row![].spacing(spacing::XS);

    for &choice in choices {
        let style: fn(&iced::Theme, button::Status) -> button::Style = if choice == selected {
            styles::button::choice_selected
        } else {
            styles::button::choice_unselected
        };

        buttons = buttons.push(
            button(text(display(choice)).size(typography::BODY))
                .style(style)
                .padding([spacing::XS, spacing::MD])
                .on_press(on_choose(choice)),
        );
    }

    column![
        text(label)
            .size(typography::BODY_LG)
            .color(theme::text_primary(is_dark)),
        buttons,
    ]
    .spacing(spacing::XS)
    .into()
}
