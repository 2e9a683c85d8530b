// SPDX-License-Identifier: MPL-2.0
//! Playback panel: autoplay, resume, subtitles and seeking.

use super::widgets;
use super::Message;
use crate::config::SEEK_STEP_CHOICES_SECS;
use crate::ui::design_tokens::spacing;
use iced::widget::column;
use iced::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackPrefs {
    pub autoplay_next: bool,
    pub resume_playback: bool,
    pub subtitles_enabled: bool,
    pub seek_step_secs: u16,
}

pub fn view<'a>(prefs: &PlaybackPrefs, is_dark: bool) -> Element<'a, Message> {
    column![
        widgets::section_title("Playback", is_dark),
        widgets::toggle_row(
            "Autoplay next episode",
            "Start the next episode when one ends",
            prefs.autoplay_next,
            is_dark,
            Message::AutoplayNextToggled,
        ),
        widgets::toggle_row(
            "Resume playback",
            "Continue from the last watched position",
            prefs.resume_playback,
            is_dark,
            Message::ResumePlaybackToggled,
        ),
        widgets::toggle_row(
            "Subtitles",
            "Show subtitles when a track is available",
            prefs.subtitles_enabled,
            is_dark,
            Message::SubtitlesToggled,
        ),
        widgets::choice_row(
            "Seek step",
            &SEEK_STEP_CHOICES_SECS,
            prefs.seek_step_secs,
            is_dark,
            |secs| format!("{}s", secs),
            Message::SeekStepChosen,
        ),
    ]
    .spacing(spacing::LG)
    .into()
}
