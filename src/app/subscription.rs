// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Remote-control input arrives as keyboard events; the mapping to a
//! [`RemoteKey`] happens here, while routing by screen happens in the update
//! loop. The animation tick only runs while a panel transition is active.

use super::{Message, RemoteKey};
use iced::keyboard::key::Named;
use iced::keyboard::{self, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Tick interval while the settings cross-fade runs.
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Listens for remote-control keys on every screen.
///
/// Events captured by a widget (e.g. a focused text input) are left alone.
pub fn create_key_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }

        let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
            return None;
        };

        remote_key(&key).map(Message::KeyPressed)
    })
}

/// Maps a keyboard key onto the remote-control model.
fn remote_key(key: &Key) -> Option<RemoteKey> {
    match key.as_ref() {
        Key::Named(Named::ArrowUp) => Some(RemoteKey::Up),
        Key::Named(Named::ArrowDown) => Some(RemoteKey::Down),
        Key::Named(Named::Enter) => Some(RemoteKey::Select),
        Key::Named(Named::Escape) => Some(RemoteKey::Back),
        _ => None,
    }
}

/// Creates a periodic tick subscription for the panel cross-fade.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
