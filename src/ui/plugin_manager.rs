// SPDX-License-Identifier: MPL-2.0
//! Dedicated plugin manager screen.
//!
//! A fuller view than the settings panel: every plugin with its author,
//! version and kind, plus the enable toggle. The registry itself lives in the
//! app shell; toggles are reported upward as events.

use crate::plugins::{Plugin, PluginRegistry};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, column, container, row, scrollable, text, toggler, Space};
use iced::{Alignment, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Toggled(&'static str),
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The user toggled a plugin; the parent owns the registry.
    PluginToggled(&'static str),
    /// Return to the settings screen.
    Back,
}

pub struct ViewContext<'a> {
    pub registry: &'a PluginRegistry,
    pub is_dark: bool,
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Toggled(id) => Event::PluginToggled(id),
        Message::Back => Event::Back,
    }
}

pub fn view<'a>(context: ViewContext<'a>) -> Element<'a, Message> {
    let is_dark = context.is_dark;

    let header = row![
        text("Plugin Manager")
            .size(typography::TITLE_LG)
            .color(theme::text_primary(is_dark)),
        Space::new().width(Length::Fill),
        button(text("Back").size(typography::BODY))
            .style(styles::button::action)
            .padding([spacing::XS, spacing::MD])
            .on_press(Message::Back),
    ]
    .align_y(Alignment::Center);

    let mut list = column![].spacing(spacing::MD);
    for plugin in context.registry.iter() {
        list = list.push(plugin_row(plugin, is_dark));
    }

    let content = column![
        header,
        text(format!(
            "{} of {} plugins enabled",
            context.registry.enabled_count(),
            context.registry.len()
        ))
        .size(typography::BODY)
        .color(theme::text_muted()),
        scrollable(list).height(Length::Fill),
    ]
    .spacing(spacing::LG)
    .padding(spacing::XL);

    container(content)
        .style(styles::container::screen(is_dark))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn plugin_row<'a>(plugin: &'a Plugin, is_dark: bool) -> Element<'a, Message> {
    let details = column![
        text(plugin.name)
            .size(typography::BODY_LG)
            .color(theme::text_primary(is_dark)),
        text(plugin.description)
            .size(typography::BODY)
            .color(theme::text_muted()),
        text(format!(
            "{} · v{} · {}",
            plugin.kind.label(),
            plugin.version,
            plugin.author
        ))
        .size(typography::CAPTION)
        .color(theme::text_muted()),
    ]
    .spacing(spacing::XXS);

    let card = row![
        details,
        Space::new().width(Length::Fill),
        toggler(plugin.enabled)
            .on_toggle(move |_| Message::Toggled(plugin.id))
            .size(sizing::TOGGLER),
    ]
    .align_y(Alignment::Center);

    container(card)
        .style(styles::container::content_card(is_dark))
        .width(Length::Fill)
        .padding(spacing::MD)
        .into()
}
