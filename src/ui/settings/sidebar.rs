// SPDX-License-Identifier: MPL-2.0
//! Settings sidebar: one row per category.
//!
//! Row visuals follow a remote-control focus model. Selection and focus are
//! independent: the selected row keeps its highlight while focus roams, and
//! the focus ring only ever sits on the focused row.

use super::{Category, Message};
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use crate::ui::theme;
use iced::widget::{button, column, mouse_area, row, text};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};

/// Resolved colors for one sidebar row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowVisuals {
    /// Highlight fill, present when the row is selected or focused.
    pub background: Option<Color>,
    /// Focus ring, present only while the row is focused.
    pub ring: Option<Color>,
    /// Tint for the glyph and label.
    pub tint: Color,
}

/// Computes row visuals from the two independent state bits.
#[must_use]
pub fn row_visuals(is_selected: bool, is_focused: bool) -> RowVisuals {
    RowVisuals {
        background: (is_selected || is_focused).then(theme::row_highlight),
        ring: is_focused.then(theme::focus_ring),
        tint: if is_selected || is_focused {
            theme::accent()
        } else {
            theme::text_muted()
        },
    }
}

/// Renders the header and the full category column.
pub fn view<'a>(
    selected: Category,
    focused: Option<Category>,
    is_dark: bool,
) -> Element<'a, Message> {
    let mut rows = column![].spacing(spacing::XXS);

    for category in Category::ALL {
        rows = rows.push(category_row(
            category,
            category == selected,
            Some(category) == focused,
        ));
    }

    let header = text("Settings")
        .size(typography::TITLE_LG)
        .color(theme::text_primary(is_dark));

    column![header, rows]
        .spacing(spacing::LG)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .padding(spacing::MD)
        .into()
}

fn category_row<'a>(category: Category, is_selected: bool, is_focused: bool) -> Element<'a, Message> {
    let visuals = row_visuals(is_selected, is_focused);

    let label = row![
        text(category.glyph()).size(sizing::ROW_GLYPH).color(visuals.tint),
        text(category.label()).size(typography::BODY_LG).color(visuals.tint),
    ]
    .spacing(spacing::SM)
    .align_y(iced::Alignment::Center);

    let row_button = button(label)
        .width(Length::Fill)
        .padding(Padding {
            top: sizing::ROW_PADDING_Y,
            bottom: sizing::ROW_PADDING_Y,
            left: sizing::ROW_PADDING_X,
            right: sizing::ROW_PADDING_X,
        })
        .style(move |_theme: &Theme, _status: button::Status| button::Style {
            background: visuals.background.map(Background::Color),
            text_color: visuals.tint,
            border: Border {
                color: visuals.ring.unwrap_or(Color::TRANSPARENT),
                width: if visuals.ring.is_some() {
                    border::WIDTH_MD
                } else {
                    0.0
                },
                radius: radius::MD.into(),
            },
            ..Default::default()
        })
        .on_press(Message::CategoryActivated(category));

    mouse_area(row_button)
        .on_enter(Message::FocusEntered(category))
        .on_exit(Message::FocusLeft(category))
        .into()
}
