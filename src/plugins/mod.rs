// SPDX-License-Identifier: MPL-2.0
//! Plugin registry for the media frontend.
//!
//! Plugins extend the frontend with metadata providers, stream sources, and
//! subtitle backends. This module only tracks what is installed and whether
//! each plugin is enabled; loading and executing plugin code is the host
//! player's concern. The enabled set persists through `[plugins]` in the
//! config file.

use crate::error::{Error, Result};

/// What a plugin contributes to the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginKind {
    MetadataProvider,
    StreamSource,
    Subtitles,
}

impl PluginKind {
    pub fn label(self) -> &'static str {
        match self {
            PluginKind::MetadataProvider => "Metadata",
            PluginKind::StreamSource => "Source",
            PluginKind::Subtitles => "Subtitles",
        }
    }
}

/// One installed plugin.
#[derive(Debug, Clone)]
pub struct Plugin {
    pub id: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub kind: PluginKind,
    pub enabled: bool,
}

/// Built-in plugin catalog.
///
/// Installation/removal is out of scope; the catalog is fixed at build time
/// and only the enabled flag varies.
fn builtin_catalog() -> Vec<Plugin> {
    vec![
        Plugin {
            id: "tmdb-metadata",
            name: "TMDB Metadata",
            version: "1.4.2",
            author: "Lumen TV",
            description: "Posters, synopses and cast information from The Movie Database.",
            kind: PluginKind::MetadataProvider,
            enabled: true,
        },
        Plugin {
            id: "local-library",
            name: "Local Library",
            version: "1.0.0",
            author: "Lumen TV",
            description: "Indexes media files from attached storage and network shares.",
            kind: PluginKind::StreamSource,
            enabled: true,
        },
        Plugin {
            id: "subs-community",
            name: "Community Subtitles",
            version: "0.9.1",
            author: "Third party",
            description: "Fetches community-maintained subtitle tracks for local media.",
            kind: PluginKind::Subtitles,
            enabled: true,
        },
        Plugin {
            id: "trakt-sync",
            name: "Trakt Sync",
            version: "0.3.0",
            author: "Third party",
            description: "Synchronizes watch history and watchlists with a Trakt account.",
            kind: PluginKind::MetadataProvider,
            enabled: true,
        },
    ]
}

/// Tracks installed plugins and their enabled state.
#[derive(Debug, Clone)]
pub struct PluginRegistry {
    plugins: Vec<Plugin>,
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl PluginRegistry {
    /// Builds the registry from the built-in catalog, applying the persisted
    /// set of disabled plugin ids. Unknown ids are ignored (the plugin may
    /// have been removed in an update).
    #[must_use]
    pub fn new(disabled_ids: &[String]) -> Self {
        let mut plugins = builtin_catalog();
        for plugin in &mut plugins {
            if disabled_ids.iter().any(|id| id == plugin.id) {
                plugin.enabled = false;
            }
        }
        Self { plugins }
    }

    /// All installed plugins, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Plugin> {
        self.plugins.iter()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn enabled_count(&self) -> usize {
        self.plugins.iter().filter(|p| p.enabled).count()
    }

    /// Flips the enabled state of the plugin with the given id and returns
    /// the new state.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let plugin = self
            .plugins
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::Plugin(format!("unknown plugin id: {}", id)))?;
        plugin.enabled = !plugin.enabled;
        Ok(plugin.enabled)
    }

    /// Ids of currently disabled plugins, for persistence.
    #[must_use]
    pub fn disabled_ids(&self) -> Vec<String> {
        self.plugins
            .iter()
            .filter(|p| !p.enabled)
            .map(|p| p.id.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_starts_with_catalog_enabled() {
        let registry = PluginRegistry::default();
        assert!(!registry.is_empty());
        assert_eq!(registry.enabled_count(), registry.len());
    }

    #[test]
    fn persisted_disabled_ids_are_applied() {
        let registry = PluginRegistry::new(&["subs-community".to_string()]);
        let subs = registry.iter().find(|p| p.id == "subs-community").unwrap();
        assert!(!subs.enabled);
        assert_eq!(registry.enabled_count(), registry.len() - 1);
    }

    #[test]
    fn unknown_persisted_ids_are_ignored() {
        let registry = PluginRegistry::new(&["removed-plugin".to_string()]);
        assert_eq!(registry.enabled_count(), registry.len());
    }

    #[test]
    fn toggle_flips_only_the_targeted_plugin() {
        let mut registry = PluginRegistry::default();
        let enabled = registry.toggle("trakt-sync").expect("known id");
        assert!(!enabled);

        for plugin in registry.iter() {
            assert_eq!(plugin.enabled, plugin.id != "trakt-sync");
        }

        let enabled = registry.toggle("trakt-sync").expect("known id");
        assert!(enabled);
    }

    #[test]
    fn toggle_unknown_id_is_an_error() {
        let mut registry = PluginRegistry::default();
        assert!(registry.toggle("does-not-exist").is_err());
    }

    #[test]
    fn disabled_ids_round_trip_through_registry() {
        let mut registry = PluginRegistry::default();
        registry.toggle("tmdb-metadata").unwrap();
        registry.toggle("subs-community").unwrap();

        let disabled = registry.disabled_ids();
        let restored = PluginRegistry::new(&disabled);

        assert_eq!(restored.disabled_ids(), disabled);
        assert_eq!(restored.enabled_count(), registry.enabled_count());
    }
}
