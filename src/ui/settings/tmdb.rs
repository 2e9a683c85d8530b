// SPDX-License-Identifier: MPL-2.0
//! TMDB enrichment panel.

use super::widgets;
use super::Message;
use crate::config::TMDB_LANGUAGE_CHOICES;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use iced::widget::{column, text};
use iced::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmdbPrefs {
    pub enabled: bool,
    pub language: &'static str,
    pub prefer_original_titles: bool,
}

pub fn view<'a>(prefs: &TmdbPrefs, is_dark: bool) -> Element<'a, Message> {
    let mut panel = column![
        widgets::section_title("TMDB Enrichment", is_dark),
        text("Enrich your local library with posters, ratings and synopses from The Movie Database.")
            .size(typography::BODY)
            .color(theme::text_muted()),
        widgets::toggle_row(
            "Enable enrichment",
            "",
            prefs.enabled,
            is_dark,
            Message::TmdbEnabledToggled,
        ),
    ]
    .spacing(spacing::LG);

    if prefs.enabled {
        panel = panel
            .push(widgets::choice_row(
                "Metadata language",
                &TMDB_LANGUAGE_CHOICES,
                prefs.language,
                is_dark,
                |lang| lang.to_string(),
                Message::TmdbLanguageChosen,
            ))
            .push(widgets::toggle_row(
                "Prefer original titles",
                "Use the original release title instead of a translation",
                prefs.prefer_original_titles,
                is_dark,
                Message::PreferOriginalTitlesToggled,
            ));
    }

    panel.into()
}
