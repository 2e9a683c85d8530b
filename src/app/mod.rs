// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between screens.
//!
//! The `App` struct wires the settings screen, the plugin manager and the
//! plugin registry together, and translates component events into side
//! effects like config persistence and screen switches. Policy decisions
//! (window size, remote-key routing, persistence timing) stay close to the
//! main update loop so user-facing behavior is easy to audit.

mod message;
mod persistence;
mod screen;
mod subscription;
mod view;

pub use message::{Flags, Message, RemoteKey};
pub use screen::Screen;

use crate::config;
use crate::plugins::PluginRegistry;
use crate::ui::settings::about::APP_NAME;
use crate::ui::{plugin_manager, settings};
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 540;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    settings: settings::State,
    registry: PluginRegistry,
    /// Config directory override from the command line, carried so saves go
    /// where the load came from.
    config_dir: Option<PathBuf>,
}

/// Builds the window settings for a living-room display.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the application state from persisted configuration and
    /// command-line flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, warning) = config::load_with_override(flags.config_dir.clone());
        if let Some(warning) = warning {
            log::warn!("{}; continuing with defaults", warning);
        }

        // A --theme flag wins over the persisted mode for this session.
        if let Some(mode) = flags.theme {
            config.general.theme_mode = mode;
        }

        let registry = PluginRegistry::new(&config.plugins.disabled);
        let settings = settings::State::new(&config);

        log::info!(
            "started with {} of {} plugins enabled",
            registry.enabled_count(),
            registry.len()
        );

        (
            App {
                screen: Screen::Settings,
                settings,
                registry,
                config_dir: flags.config_dir,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Settings => format!("Settings - {}", APP_NAME),
            Screen::PluginManager => format!("Plugin Manager - {}", APP_NAME),
        }
    }

    fn theme(&self) -> Theme {
        if self.settings.theme_mode().is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let key_sub = subscription::create_key_subscription();
        let tick_sub = subscription::create_tick_subscription(self.settings.is_animating());
        Subscription::batch([key_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Settings(settings_message) => {
                let event = self.settings.update(settings_message);
                self.handle_settings_event(event);
            }
            Message::PluginManager(manager_message) => {
                match plugin_manager::update(manager_message) {
                    plugin_manager::Event::None => {}
                    plugin_manager::Event::PluginToggled(id) => self.toggle_plugin(id),
                    plugin_manager::Event::Back => self.screen = Screen::Settings,
                }
            }
            Message::KeyPressed(key) => self.handle_remote_key(key),
            Message::Tick(now) => {
                let _ = self.settings.update(settings::Message::AnimationTick(now));
            }
        }

        Task::none()
    }

    fn handle_settings_event(&mut self, event: settings::Event) {
        match event {
            settings::Event::None => {}
            settings::Event::PreferencesChanged => self.persist(),
            settings::Event::PluginToggled(id) => self.toggle_plugin(id),
            settings::Event::OpenPluginManager => self.screen = Screen::PluginManager,
        }
    }

    /// Routes a remote-control key based on the active screen.
    fn handle_remote_key(&mut self, key: RemoteKey) {
        match self.screen {
            Screen::Settings => {
                let message = match key {
                    RemoteKey::Up => settings::Message::FocusMovedUp,
                    RemoteKey::Down => settings::Message::FocusMovedDown,
                    RemoteKey::Select => settings::Message::ActivateFocused,
                    // Back has nowhere to go from the settings root.
                    RemoteKey::Back => return,
                };
                let event = self.settings.update(message);
                self.handle_settings_event(event);
            }
            Screen::PluginManager => {
                if key == RemoteKey::Back {
                    self.screen = Screen::Settings;
                }
            }
        }
    }

    fn toggle_plugin(&mut self, id: &str) {
        match self.registry.toggle(id) {
            Ok(enabled) => {
                log::info!("plugin {} {}", id, if enabled { "enabled" } else { "disabled" });
                self.persist();
            }
            Err(error) => log::warn!("{}", error),
        }
    }

    fn persist(&self) {
        persistence::persist_preferences(persistence::PreferencesContext {
            settings: &self.settings,
            registry: &self.registry,
            config_dir: self.config_dir.clone(),
        });
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            settings: &self.settings,
            registry: &self.registry,
            is_dark: self.settings.theme_mode().is_dark(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;
    use crate::ui::settings::Category;
    use std::fs;
    use tempfile::tempdir;

    fn app_in(dir: &std::path::Path) -> App {
        let (app, _task) = App::new(Flags {
            config_dir: Some(dir.to_path_buf()),
            theme: None,
        });
        app
    }

    #[test]
    fn new_starts_on_the_settings_screen() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let app = app_in(temp_dir.path());

        assert_eq!(app.screen, Screen::Settings);
        assert_eq!(app.settings.selected(), Category::Appearance);
        assert_eq!(app.registry.enabled_count(), app.registry.len());
    }

    #[test]
    fn theme_flag_overrides_persisted_mode() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (app, _task) = App::new(Flags {
            config_dir: Some(temp_dir.path().to_path_buf()),
            theme: Some(ThemeMode::Light),
        });

        assert_eq!(app.settings.theme_mode(), ThemeMode::Light);
        assert!(matches!(app.theme(), Theme::Light));
    }

    #[test]
    fn corrupt_config_falls_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("settings.toml"), "not = valid = toml")
            .expect("failed to write file");

        let app = app_in(temp_dir.path());
        assert_eq!(app.settings.theme_mode(), ThemeMode::default());
    }

    #[test]
    fn remote_keys_drive_sidebar_focus_and_selection() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_in(temp_dir.path());

        let _ = app.update(Message::KeyPressed(RemoteKey::Down));
        let _ = app.update(Message::KeyPressed(RemoteKey::Down));
        assert_eq!(app.settings.focused(), Some(Category::TmdbEnrichment));

        let _ = app.update(Message::KeyPressed(RemoteKey::Select));
        assert_eq!(app.settings.selected(), Category::TmdbEnrichment);
    }

    #[test]
    fn remote_up_from_rest_focuses_the_selected_row() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_in(temp_dir.path());

        let _ = app.update(Message::KeyPressed(RemoteKey::Up));
        assert_eq!(app.settings.focused(), Some(Category::Appearance));
    }

    #[test]
    fn back_key_is_inert_on_the_settings_root() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_in(temp_dir.path());

        let _ = app.update(Message::KeyPressed(RemoteKey::Back));
        assert_eq!(app.screen, Screen::Settings);
    }

    #[test]
    fn open_plugin_manager_switches_screens_and_back_returns() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_in(temp_dir.path());

        let _ = app.update(Message::Settings(settings::Message::OpenPluginManager));
        assert_eq!(app.screen, Screen::PluginManager);

        let _ = app.update(Message::KeyPressed(RemoteKey::Back));
        assert_eq!(app.screen, Screen::Settings);
    }

    #[test]
    fn manager_back_button_returns_to_settings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_in(temp_dir.path());
        app.screen = Screen::PluginManager;

        let _ = app.update(Message::PluginManager(plugin_manager::Message::Back));
        assert_eq!(app.screen, Screen::Settings);
    }

    #[test]
    fn preference_change_writes_the_config_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_in(temp_dir.path());

        let _ = app.update(Message::Settings(settings::Message::ThemeModeChosen(
            ThemeMode::Light,
        )));

        let config_path = temp_dir.path().join("settings.toml");
        assert!(config_path.exists());
        let contents = fs::read_to_string(config_path).expect("config should be readable");
        assert!(contents.contains("theme_mode = \"light\""));
    }

    #[test]
    fn plugin_toggle_updates_registry_and_persists() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_in(temp_dir.path());

        let _ = app.update(Message::Settings(settings::Message::PluginToggled(
            "trakt-sync",
        )));

        assert_eq!(app.registry.enabled_count(), app.registry.len() - 1);
        let contents = fs::read_to_string(temp_dir.path().join("settings.toml"))
            .expect("config should be readable");
        assert!(contents.contains("trakt-sync"));
    }

    #[test]
    fn plugin_state_survives_a_restart() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_in(temp_dir.path());

        let _ = app.update(Message::PluginManager(plugin_manager::Message::Toggled(
            "subs-community",
        )));

        let restarted = app_in(temp_dir.path());
        let subs = restarted
            .registry
            .iter()
            .find(|p| p.id == "subs-community")
            .expect("plugin in catalog");
        assert!(!subs.enabled);
    }

    #[test]
    fn toggling_an_unknown_plugin_does_not_panic() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_in(temp_dir.path());

        let _ = app.update(Message::Settings(settings::Message::PluginToggled(
            "does-not-exist",
        )));
        assert_eq!(app.registry.enabled_count(), app.registry.len());
    }

    #[test]
    fn title_follows_the_active_screen() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_in(temp_dir.path());

        assert_eq!(app.title(), "Settings - Lumen TV");
        app.screen = Screen::PluginManager;
        assert_eq!(app.title(), "Plugin Manager - Lumen TV");
    }

    #[test]
    fn tick_messages_advance_the_crossfade() {
        use std::time::{Duration, Instant};

        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut app = app_in(temp_dir.path());

        let _ = app.update(Message::Settings(settings::Message::CategoryActivated(
            Category::About,
        )));
        assert!(app.settings.is_animating());

        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(1)));
        assert!(!app.settings.is_animating());
    }
}
