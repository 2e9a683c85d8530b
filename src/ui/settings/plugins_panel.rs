// SPDX-License-Identifier: MPL-2.0
//! Plugins panel: quick enable/disable plus a door into the full manager.

use super::widgets;
use super::Message;
use crate::plugins::PluginRegistry;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, column, text};
use iced::Element;

pub fn view<'a>(registry: &'a PluginRegistry, is_dark: bool) -> Element<'a, Message> {
    let mut panel = column![
        widgets::section_title("Plugins", is_dark),
        text(format!(
            "{} of {} plugins enabled",
            registry.enabled_count(),
            registry.len()
        ))
        .size(typography::BODY)
        .color(theme::text_muted()),
    ]
    .spacing(spacing::LG);

    for plugin in registry.iter() {
        panel = panel.push(widgets::toggle_row(
            plugin.name,
            plugin.description,
            plugin.enabled,
            is_dark,
            move |_| Message::PluginToggled(plugin.id),
        ));
    }

    panel
        .push(
            button(text("Open plugin manager").size(typography::BODY))
                .style(styles::button::action)
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::OpenPluginManager),
        )
        .into()
}
