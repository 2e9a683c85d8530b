// SPDX-License-Identifier: MPL-2.0

/// Top-level screens of the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Settings,
    PluginManager,
}
