// SPDX-License-Identifier: MPL-2.0
//! About panel: application name, version and license.

use super::widgets;
use super::Message;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use iced::widget::{column, text};
use iced::Element;

pub const APP_NAME: &str = "Lumen TV";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_LICENSE: &str = "Mozilla Public License 2.0";

pub fn view<'a>(is_dark: bool) -> Element<'a, Message> {
    column![
        widgets::section_title("About", is_dark),
        text(APP_NAME)
            .size(typography::TITLE_LG)
            .color(theme::text_primary(is_dark)),
        text(format!("Version {}", APP_VERSION))
            .size(typography::BODY)
            .color(theme::text_muted()),
        text("A living-room media center for your local library.")
            .size(typography::BODY)
            .color(theme::text_primary(is_dark)),
        text(APP_LICENSE)
            .size(typography::CAPTION)
            .color(theme::text_muted()),
    ]
    .spacing(spacing::MD)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_matches_cargo_manifest() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
        assert!(!APP_VERSION.is_empty());
    }
}
