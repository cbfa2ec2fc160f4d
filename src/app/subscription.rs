// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are always listened to. Window-wide pointer tracking
//! comes from the zoom view and only exists while a drag is active.

use super::Message;
use crate::ui::zoom_view::component;
use iced::{event, keyboard, Event, Subscription};

/// Keyboard shortcuts for zoom, rotation and reset.
pub fn create_shortcut_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                shortcut(&key, modifiers).map(Message::ZoomView)
            }
            _ => None,
        }
    })
}

/// Maps a key press to the zoom view message it triggers.
///
/// `+`/`=` zoom in, `-` zooms out, `r` rotates clockwise, `Shift+R`
/// counter-clockwise and `0` resets. Presses with Ctrl/Cmd or Alt are ignored.
pub(super) fn shortcut(
    key: &keyboard::Key,
    modifiers: keyboard::Modifiers,
) -> Option<component::Message> {
    if modifiers.command() || modifiers.alt() {
        return None;
    }
    let keyboard::Key::Character(c) = key else {
        return None;
    };
    match c.as_str() {
        "+" | "=" => Some(component::Message::ZoomIn),
        "-" => Some(component::Message::ZoomOut),
        "r" | "R" if modifiers.shift() => Some(component::Message::RotateCounterClockwise),
        "r" => Some(component::Message::RotateClockwise),
        "0" => Some(component::Message::Reset),
        _ => None,
    }
}
