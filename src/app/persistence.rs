// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! Builds a full config snapshot from the live state and writes it out.
//! Persistence failures must never take down the UI; they are logged and the
//! session continues with in-memory state.

use crate::config::{self, Config};
use crate::plugins::PluginRegistry;
use crate::ui::settings;
use std::path::PathBuf;

pub struct PreferencesContext<'a> {
    pub settings: &'a settings::State,
    pub registry: &'a PluginRegistry,
    pub config_dir: Option<PathBuf>,
}

pub fn persist_preferences(context: PreferencesContext<'_>) {
    let mut config = Config::default();
    context.settings.write_config(&mut config);
    config.plugins.disabled = context.registry.disabled_ids();

    if let Err(error) = config::save_with_override(&config, context.config_dir) {
        log::warn!("failed to persist preferences: {}", error);
    }
}
