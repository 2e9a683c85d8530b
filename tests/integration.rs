// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests across config persistence, the plugin registry and the
//! settings screen state.

use lumen_tv::config::{self, Config, ThemeMode};
use lumen_tv::plugins::PluginRegistry;
use lumen_tv::ui::settings::{self, Category};
use tempfile::tempdir;

#[test]
fn preferences_survive_a_save_load_cycle() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // Edit preferences through the screen state, as the UI would.
    let mut state = settings::State::new(&Config::default());
    state.update(settings::Message::ThemeModeChosen(ThemeMode::Light));
    state.update(settings::Message::SubtitlesToggled(true));
    state.update(settings::Message::SeekStepChosen(30));
    state.update(settings::Message::TmdbLanguageChosen("fr-FR"));

    let mut config = Config::default();
    state.write_config(&mut config);
    config::save_to_path(&config, &config_path).expect("failed to save config");

    // A fresh session sees the edited values.
    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let restored = settings::State::new(&loaded);

    let mut round_tripped = Config::default();
    restored.write_config(&mut round_tripped);
    assert_eq!(round_tripped.general.theme_mode, ThemeMode::Light);
    assert!(round_tripped.playback.subtitles_enabled);
    assert_eq!(round_tripped.playback.seek_step_secs, 30);
    assert_eq!(round_tripped.tmdb.language, "fr-FR");
}

#[test]
fn disabled_plugins_round_trip_through_the_config_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut registry = PluginRegistry::default();
    registry.toggle("trakt-sync").expect("known plugin id");
    registry.toggle("subs-community").expect("known plugin id");

    let mut config = Config::default();
    config.plugins.disabled = registry.disabled_ids();
    config::save_to_path(&config, &config_path).expect("failed to save config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let restored = PluginRegistry::new(&loaded.plugins.disabled);

    assert_eq!(restored.enabled_count(), restored.len() - 2);
    for id in ["trakt-sync", "subs-community"] {
        let plugin = restored.iter().find(|p| p.id == id).expect("plugin exists");
        assert!(!plugin.enabled, "{} should stay disabled", id);
    }
}

#[test]
fn remote_navigation_walks_the_whole_sidebar() {
    let mut state = settings::State::new(&Config::default());

    // Walk focus from top to bottom, activating each row.
    let mut visited = vec![state.selected()];
    for _ in 1..Category::ALL.len() {
        state.update(settings::Message::FocusMovedDown);
        state.update(settings::Message::ActivateFocused);
        visited.push(state.selected());
    }

    assert_eq!(visited, Category::ALL.to_vec());

    // Past the end, focus and selection stay put.
    state.update(settings::Message::FocusMovedDown);
    state.update(settings::Message::ActivateFocused);
    assert_eq!(state.selected(), Category::About);
}

#[test]
fn config_written_by_an_older_version_still_loads() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // Only a subset of today's keys, plus one that no longer exists.
    let legacy = r#"
[general]
theme_mode = "light"
window_scale = 1.5

[playback]
autoplay_next = false
"#;
    std::fs::write(&config_path, legacy).expect("failed to write legacy config");

    let loaded = config::load_from_path(&config_path).expect("legacy config should load");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    assert!(!loaded.playback.autoplay_next);
    assert_eq!(loaded.tmdb, lumen_tv::config::TmdbConfig::default());
}
