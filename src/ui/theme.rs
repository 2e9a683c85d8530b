// SPDX-License-Identifier: MPL-2.0
//! Semantic color helpers for the TV interface.
//!
//! The settings screen is designed dark-first; light mode keeps the same
//! accent hue and swaps the surface/text grays.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;

/// Screen background behind both panes.
pub fn screen_background(is_dark: bool) -> Color {
    if is_dark {
        palette::GRAY_950
    } else {
        palette::GRAY_100
    }
}

/// Surface of the content panel card.
pub fn card_background(is_dark: bool) -> Color {
    if is_dark {
        palette::GRAY_900
    } else {
        palette::WHITE
    }
}

/// Highlight fill behind a selected or focused sidebar row.
pub fn row_highlight() -> Color {
    Color {
        a: opacity::ROW_HIGHLIGHT,
        ..palette::ACCENT_500
    }
}

/// Accent ring drawn around the focused row.
pub fn focus_ring() -> Color {
    palette::ACCENT_400
}

/// Tint for icons and labels that are selected or focused.
pub fn accent() -> Color {
    palette::ACCENT_400
}

/// Primary text color.
pub fn text_primary(is_dark: bool) -> Color {
    if is_dark {
        palette::GRAY_100
    } else {
        palette::GRAY_900
    }
}

/// Muted text color for idle rows and descriptions.
pub fn text_muted() -> Color {
    palette::GRAY_400
}

/// Standard color for error text.
pub fn error_text() -> Color {
    palette::ERROR_500
}
