// SPDX-License-Identifier: MPL-2.0
//! Top-level view dispatch.

use super::{Message, Screen};
use crate::plugins::PluginRegistry;
use crate::ui::{plugin_manager, settings};
use iced::Element;

/// Everything the top-level view needs from the application state.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub settings: &'a settings::State,
    pub registry: &'a PluginRegistry,
    pub is_dark: bool,
}

pub fn view(context: ViewContext<'_>) -> Element<'_, Message> {
    match context.screen {
        Screen::Settings => context
            .settings
            .view(settings::ViewContext {
                registry: context.registry,
                is_dark: context.is_dark,
            })
            .map(Message::Settings),
        Screen::PluginManager => plugin_manager::view(plugin_manager::ViewContext {
            registry: context.registry,
            is_dark: context.is_dark,
        })
        .map(Message::PluginManager),
    }
}
