// SPDX-License-Identifier: MPL-2.0
//! Subscription management for the application.
//!
//! - Playback timer while an image sequence plays
//! - Keyboard shortcuts not captured by a widget

use super::{Message, Shortcut};
use crate::playback::Playback;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, time, Event, Subscription};

/// Ticks at the playback frame rate while playing.
pub fn create_tick_subscription(playback: &Playback) -> Subscription<Message> {
    if playback.is_playing() {
        time::every(playback.frame_interval()).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Routes key presses that no widget captured to [`shortcut_for`].
pub fn create_shortcut_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                shortcut_for(&key, modifiers).map(Message::Shortcut)
            }
            _ => None,
        }
    })
}

/// Maps a key press to its shortcut. Presses with Ctrl, Cmd or Alt are ignored.
#[must_use]
pub fn shortcut_for(key: &Key, modifiers: Modifiers) -> Option<Shortcut> {
    if modifiers.command() || modifiers.control() || modifiers.alt() {
        return None;
    }

    match key {
        Key::Character(c) => match c.as_str() {
            "+" | "=" => Some(Shortcut::ZoomIn),
            "-" => Some(Shortcut::ZoomOut),
            "0" => Some(Shortcut::ResetViews),
            "s" | "S" => Some(Shortcut::ToggleSplit),
            "z" | "Z" => Some(Shortcut::ToggleZoomBox),
            "g" | "G" => Some(Shortcut::ToggleGrid),
            _ => None,
        },
        Key::Named(Named::Space) => Some(Shortcut::TogglePlay),
        Key::Named(Named::ArrowRight) => Some(Shortcut::StepForward),
        Key::Named(Named::ArrowLeft) => Some(Shortcut::StepBackward),
        _ => None,
    }
}
