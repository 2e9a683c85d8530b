// SPDX-License-Identifier: MPL-2.0
//! Appearance panel: theme mode and motion preferences.

use super::widgets;
use super::Message;
use crate::config::ThemeMode;
use crate::ui::design_tokens::spacing;
use iced::widget::column;
use iced::Element;

const THEME_MODES: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

pub fn view<'a>(theme_mode: ThemeMode, reduce_motion: bool, is_dark: bool) -> Element<'a, Message> {
    column![
        widgets::section_title("Appearance", is_dark),
        widgets::choice_row(
            "Theme",
            &THEME_MODES,
            theme_mode,
            is_dark,
            |mode| match mode {
                ThemeMode::Light => "Light".to_string(),
                ThemeMode::Dark => "Dark".to_string(),
                ThemeMode::System => "System".to_string(),
            },
            Message::ThemeModeChosen,
        ),
        widgets::toggle_row(
            "Reduce motion",
            "Skip panel transitions",
            reduce_motion,
            is_dark,
            Message::ReduceMotionToggled,
        ),
    ]
    .spacing(spacing::LG)
    .into()
}
