// SPDX-License-Identifier: MPL-2.0
//! Top-level message and launch flag types.

use crate::config::ThemeMode;
use crate::ui::{plugin_manager, settings};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level application messages.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Messages from the settings screen.
    Settings(settings::Message),
    /// Messages from the plugin manager screen.
    PluginManager(plugin_manager::Message),
    /// A remote-control key, routed by the current screen.
    KeyPressed(RemoteKey),
    /// Animation tick while a panel transition runs.
    Tick(Instant),
}

/// The subset of remote-control keys the frontend reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteKey {
    Up,
    Down,
    Select,
    Back,
}

/// Command-line flags passed from `main` to the application loop.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides the config directory (`--config-dir`).
    pub config_dir: Option<PathBuf>,
    /// Overrides the configured theme mode for this session (`--theme`).
    pub theme: Option<ThemeMode>,
}
