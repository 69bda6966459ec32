// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Listens for the Escape key, which closes the gallery or the menu.
///
/// Only uncaptured events are forwarded, so Escape inside a focused text
/// input keeps its widget-level behavior.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if status == event::Status::Captured {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::EscapePressed),
            _ => None,
        }
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// Active only while notifications exist, so an idle page schedules nothing.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(250)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
