//! Input bindings
//!
//! Keys and buttons both end up as a [`ViewerEvent`]; the viewer never
//! knows which one fired.

use iced::keyboard::{key::Named, Key, Modifiers};
use pgn_core::ViewerEvent;

use crate::app::Message;

/// Viewer event bound to a key, if any
pub fn key_event(key: &Key) -> Option<ViewerEvent> {
    match key {
        Key::Named(Named::ArrowRight) => Some(ViewerEvent::Advance),
        Key::Named(Named::ArrowLeft) => Some(ViewerEvent::Retreat),
        _ => None,
    }
}

/// Key press handler for the keyboard subscription
pub fn on_key_press(key: Key, _modifiers: Modifiers) -> Option<Message> {
    key_event(&key).map(Message::Viewer)
}

/// Label and event for each navigation button, in panel order
pub const NAVIGATION_BUTTONS: [(&str, ViewerEvent); 2] = [
    ("Back", ViewerEvent::Retreat),
    ("Next", ViewerEvent::Advance),
];
