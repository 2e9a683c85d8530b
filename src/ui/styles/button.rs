// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Style for the selected option in a choice row (theme mode, seek step,
/// metadata language).
pub fn choice_selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ACCENT_400,
        _ => palette::ACCENT_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::ACCENT_600,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Style for unselected options in a choice row.
pub fn choice_unselected(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color) = match status {
        button::Status::Hovered => (palette::GRAY_700, palette::ACCENT_500),
        _ => (palette::GRAY_800, palette::GRAY_700),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::GRAY_200,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Style for secondary actions ("Open plugin manager", "Back").
pub fn action(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::GRAY_700,
        _ => palette::GRAY_800,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::GRAY_100,
        border: Border {
            color: palette::ACCENT_600,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
