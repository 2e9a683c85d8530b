// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode and motion preferences
//! - `[playback]` - Playback behavior (autoplay, resume, subtitles, seeking)
//! - `[tmdb]` - TMDB metadata enrichment preferences
//! - `[plugins]` - Disabled plugin identifiers
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set the `LUMEN_TV_CONFIG_DIR` environment variable
//! 4. Falls back to the platform config directory via `dirs`

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Directory name under the platform config dir.
const APP_DIR: &str = "lumen-tv";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LUMEN_TV_CONFIG_DIR";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// Application theme mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Detect system theme; default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Parses a CLI/user-supplied mode name, case-insensitively.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(Error::Config(format!("invalid theme mode: {}", other))),
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        Self::parse(raw)
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,

    /// Disable UI transitions such as the settings cross-fade.
    #[serde(default = "default_reduce_motion")]
    pub reduce_motion: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            reduce_motion: DEFAULT_REDUCE_MOTION,
        }
    }
}

/// Playback behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Start the next episode automatically.
    #[serde(default = "default_autoplay_next")]
    pub autoplay_next: bool,

    /// Resume playback from the last watched position.
    #[serde(default = "default_resume_playback")]
    pub resume_playback: bool,

    /// Show subtitles when available.
    #[serde(default = "default_subtitles_enabled")]
    pub subtitles_enabled: bool,

    /// Seek step in seconds for remote left/right presses.
    #[serde(default = "default_seek_step_secs")]
    pub seek_step_secs: u16,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            autoplay_next: DEFAULT_AUTOPLAY_NEXT,
            resume_playback: DEFAULT_RESUME_PLAYBACK,
            subtitles_enabled: DEFAULT_SUBTITLES_ENABLED,
            seek_step_secs: DEFAULT_SEEK_STEP_SECS,
        }
    }
}

/// TMDB metadata enrichment settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TmdbConfig {
    /// Enrich local media with TMDB metadata.
    #[serde(default = "default_tmdb_enabled")]
    pub enabled: bool,

    /// Preferred metadata language (BCP-47).
    #[serde(default = "default_tmdb_language")]
    pub language: String,

    /// Prefer original titles over translated ones.
    #[serde(default = "default_tmdb_prefer_original_titles")]
    pub prefer_original_titles: bool,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_TMDB_ENABLED,
            language: DEFAULT_TMDB_LANGUAGE.to_string(),
            prefer_original_titles: DEFAULT_TMDB_PREFER_ORIGINAL_TITLES,
        }
    }
}

/// Plugin state settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PluginsConfig {
    /// Identifiers of plugins the user has disabled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled: Vec<String>,
}

// Serde default helpers. `#[serde(default = ...)]` requires functions.
fn default_reduce_motion() -> bool {
    DEFAULT_REDUCE_MOTION
}
fn default_autoplay_next() -> bool {
    DEFAULT_AUTOPLAY_NEXT
}
fn default_resume_playback() -> bool {
    DEFAULT_RESUME_PLAYBACK
}
fn default_subtitles_enabled() -> bool {
    DEFAULT_SUBTITLES_ENABLED
}
fn default_seek_step_secs() -> u16 {
    DEFAULT_SEEK_STEP_SECS
}
fn default_tmdb_enabled() -> bool {
    DEFAULT_TMDB_ENABLED
}
fn default_tmdb_language() -> String {
    DEFAULT_TMDB_LANGUAGE.to_string()
}
fn default_tmdb_prefer_original_titles() -> bool {
    DEFAULT_TMDB_PREFER_ORIGINAL_TITLES
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Playback behavior settings.
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// TMDB metadata enrichment settings.
    #[serde(default)]
    pub tmdb: TmdbConfig,

    /// Plugin state settings.
    #[serde(default)]
    pub plugins: PluginsConfig,
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional directory override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    let dir = base_dir
        .or_else(|| std::env::var(ENV_CONFIG_DIR).ok().map(PathBuf::from))
        .or_else(|| dirs::config_dir().map(|d| d.join(APP_DIR)));

    dir.map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional warning). If loading fails, returns
/// the default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    return (
                        Config::default(),
                        Some(format!("could not read {}: {}", path.display(), error)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
                reduce_motion: true,
            },
            playback: PlaybackConfig {
                autoplay_next: false,
                resume_playback: true,
                subtitles_enabled: true,
                seek_step_secs: 30,
            },
            tmdb: TmdbConfig {
                enabled: false,
                language: "fr-FR".to_string(),
                prefer_original_titles: true,
            },
            plugins: PluginsConfig {
                disabled: vec!["subs-community".to_string()],
            },
        };

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn save_creates_nested_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("dir").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn load_invalid_toml_returns_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_to_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = 12").expect("failed to write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_remaining_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[tmdb]\nenabled = false\n").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert!(!loaded.tmdb.enabled);
        assert_eq!(loaded.tmdb.language, DEFAULT_TMDB_LANGUAGE);
        assert_eq!(loaded.playback, PlaybackConfig::default());
    }

    #[test]
    fn theme_mode_parse_accepts_known_names() {
        assert_eq!(ThemeMode::parse("light").unwrap(), ThemeMode::Light);
        assert_eq!(ThemeMode::parse("DARK").unwrap(), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse("System").unwrap(), ThemeMode::System);
        assert!(ThemeMode::parse("sepia").is_err());
    }

    #[test]
    fn theme_mode_is_dark_returns_fixed_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on the host; just verify it does not panic
        let _ = ThemeMode::System.is_dark();
    }
}
