// SPDX-License-Identifier: MPL-2.0
//! Settings screen: category sidebar plus a cross-fading content panel.
//!
//! The screen owns the selected category, the roaming focus, the cross-fade
//! state and the editable preference values. Preference persistence is the
//! parent's job; every mutation that should reach disk is reported through
//! [`Event`].

pub mod about;
pub mod appearance;
pub mod category;
pub mod crossfade;
pub mod playback;
pub mod plugins_panel;
pub mod sidebar;
pub mod tmdb;
mod widgets;

pub use category::Category;
pub use crossfade::Crossfade;

use crate::config::{
    Config, GeneralConfig, PlaybackConfig, ThemeMode, TmdbConfig, DEFAULT_TMDB_LANGUAGE,
    TMDB_LANGUAGE_CHOICES,
};
use crate::plugins::PluginRegistry;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{container, row, Space, Stack};
use iced::{Element, Length};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    CategoryActivated(Category),
    FocusEntered(Category),
    FocusLeft(Category),
    FocusMovedUp,
    FocusMovedDown,
    ActivateFocused,
    AnimationTick(Instant),
    ThemeModeChosen(ThemeMode),
    ReduceMotionToggled(bool),
    AutoplayNextToggled(bool),
    ResumePlaybackToggled(bool),
    SubtitlesToggled(bool),
    SeekStepChosen(u16),
    TmdbEnabledToggled(bool),
    TmdbLanguageChosen(&'static str),
    PreferOriginalTitlesToggled(bool),
    PluginToggled(&'static str),
    OpenPluginManager,
}

/// What the parent needs to react to after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// A preference changed and should be persisted.
    PreferencesChanged,
    /// The user toggled a plugin; the parent owns the registry.
    PluginToggled(&'static str),
    /// Navigate to the dedicated plugin manager screen.
    OpenPluginManager,
}

/// Read-only data the view needs from the parent.
pub struct ViewContext<'a> {
    pub registry: &'a PluginRegistry,
    pub is_dark: bool,
}

#[derive(Debug, Clone)]
pub struct State {
    selected: Category,
    focused: Option<Category>,
    crossfade: Crossfade,
    theme_mode: ThemeMode,
    reduce_motion: bool,
    playback: playback::PlaybackPrefs,
    tmdb: tmdb::TmdbPrefs,
}

impl State {
    /// Builds the screen state from loaded configuration.
    pub fn new(config: &Config) -> Self {
        // Settle on a known language choice so the picker always has a
        // selected entry, even if the file carried something else.
        let language = TMDB_LANGUAGE_CHOICES
            .iter()
            .copied()
            .find(|choice| *choice == config.tmdb.language)
            .unwrap_or(DEFAULT_TMDB_LANGUAGE);

        Self {
            selected: Category::Appearance,
            focused: None,
            crossfade: Crossfade::default(),
            theme_mode: config.general.theme_mode,
            reduce_motion: config.general.reduce_motion,
            playback: playback::PlaybackPrefs {
                autoplay_next: config.playback.autoplay_next,
                resume_playback: config.playback.resume_playback,
                subtitles_enabled: config.playback.subtitles_enabled,
                seek_step_secs: config.playback.seek_step_secs,
            },
            tmdb: tmdb::TmdbPrefs {
                enabled: config.tmdb.enabled,
                language,
                prefer_original_titles: config.tmdb.prefer_original_titles,
            },
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::CategoryActivated(category) => self.activate(category, Instant::now()),
            Message::FocusEntered(category) => {
                self.focused = Some(category);
                Event::None
            }
            Message::FocusLeft(category) => {
                if self.focused == Some(category) {
                    self.focused = None;
                }
                Event::None
            }
            Message::FocusMovedUp => {
                self.focused = Some(self.focused.unwrap_or(self.selected).previous());
                Event::None
            }
            Message::FocusMovedDown => {
                self.focused = Some(self.focused.unwrap_or(self.selected).next());
                Event::None
            }
            Message::ActivateFocused => match self.focused {
                Some(category) => self.activate(category, Instant::now()),
                None => Event::None,
            },
            Message::AnimationTick(now) => {
                self.crossfade.tick(now);
                Event::None
            }
            Message::ThemeModeChosen(mode) => {
                self.theme_mode = mode;
                Event::PreferencesChanged
            }
            Message::ReduceMotionToggled(value) => {
                self.reduce_motion = value;
                if value {
                    self.crossfade.finish();
                }
                Event::PreferencesChanged
            }
            Message::AutoplayNextToggled(value) => {
                self.playback.autoplay_next = value;
                Event::PreferencesChanged
            }
            Message::ResumePlaybackToggled(value) => {
                self.playback.resume_playback = value;
                Event::PreferencesChanged
            }
            Message::SubtitlesToggled(value) => {
                self.playback.subtitles_enabled = value;
                Event::PreferencesChanged
            }
            Message::SeekStepChosen(secs) => {
                self.playback.seek_step_secs = secs;
                Event::PreferencesChanged
            }
            Message::TmdbEnabledToggled(value) => {
                self.tmdb.enabled = value;
                Event::PreferencesChanged
            }
            Message::TmdbLanguageChosen(language) => {
                self.tmdb.language = language;
                Event::PreferencesChanged
            }
            Message::PreferOriginalTitlesToggled(value) => {
                self.tmdb.prefer_original_titles = value;
                Event::PreferencesChanged
            }
            Message::PluginToggled(id) => Event::PluginToggled(id),
            Message::OpenPluginManager => Event::OpenPluginManager,
        }
    }

    /// Selects `category`, fading the panel over unless motion is reduced.
    ///
    /// Re-activating the current selection is a no-op; no fade restarts.
    fn activate(&mut self, category: Category, now: Instant) -> Event {
        if category == self.selected {
            return Event::None;
        }

        if !self.reduce_motion {
            self.crossfade.begin(self.selected, now);
        }
        self.selected = category;
        Event::None
    }

    pub fn view<'a>(&'a self, context: ViewContext<'a>) -> Element<'a, Message> {
        let is_dark = context.is_dark;

        // During the first half of a fade the outgoing panel stays on screen.
        let visible = if self.crossfade.showing_outgoing() {
            self.crossfade.outgoing().unwrap_or(self.selected)
        } else {
            self.selected
        };

        let panel = match visible {
            Category::Appearance => appearance::view(self.theme_mode, self.reduce_motion, is_dark),
            Category::Plugins => plugins_panel::view(context.registry, is_dark),
            Category::TmdbEnrichment => tmdb::view(&self.tmdb, is_dark),
            Category::Playback => playback::view(&self.playback, is_dark),
            Category::About => about::view(is_dark),
        };

        let card = container(panel)
            .style(styles::container::content_card(is_dark))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL);

        let mut content = Stack::new().push(card);

        if self.crossfade.is_active() {
            content = content.push(
                container(Space::new())
                    .style(styles::container::fade_scrim(
                        is_dark,
                        self.crossfade.scrim_alpha(),
                    ))
                    .width(Length::Fill)
                    .height(Length::Fill),
            );
        }

        let layout = row![
            sidebar::view(self.selected, self.focused, is_dark),
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD),
        ]
        .width(Length::Fill)
        .height(Length::Fill);

        container(layout)
            .style(styles::container::screen(is_dark))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    // Accessors used by the app shell.

    #[must_use]
    pub fn selected(&self) -> Category {
        self.selected
    }

    #[must_use]
    pub fn focused(&self) -> Option<Category> {
        self.focused
    }

    /// Whether the animation tick subscription should run.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.crossfade.is_active()
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    /// Writes the editable preferences back into `config`.
    ///
    /// The plugins section is owned by the registry and left untouched.
    pub fn write_config(&self, config: &mut Config) {
        config.general = GeneralConfig {
            theme_mode: self.theme_mode,
            reduce_motion: self.reduce_motion,
        };
        config.playback = PlaybackConfig {
            autoplay_next: self.playback.autoplay_next,
            resume_playback: self.playback.resume_playback,
            subtitles_enabled: self.playback.subtitles_enabled,
            seek_step_secs: self.playback.seek_step_secs,
        };
        config.tmdb = TmdbConfig {
            enabled: self.tmdb.enabled,
            language: self.tmdb.language.to_string(),
            prefer_original_titles: self.tmdb.prefer_original_titles,
        };
    }
}
