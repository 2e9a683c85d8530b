// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::radius;
use crate::ui::theme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-screen background behind both panes.
pub fn screen(is_dark: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(theme::screen_background(is_dark))),
        ..Default::default()
    }
}

/// Rounded card surface of the content panel.
pub fn content_card(is_dark: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(theme::card_background(is_dark))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Scrim layered over the content panel while a cross-fade runs.
///
/// The alpha follows the transition progress, so content dissolves through
/// the card surface color.
pub fn fade_scrim(is_dark: bool, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha.clamp(0.0, 1.0),
            ..theme::card_background(is_dark)
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrim_alpha_is_clamped() {
        let theme = Theme::Dark;
        let style = fade_scrim(true, 2.5)(&theme);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, 1.0),
            other => panic!("expected scrim color, got {:?}", other),
        }
    }
}
