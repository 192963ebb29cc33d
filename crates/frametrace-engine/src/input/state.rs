use std::collections::HashSet;

use super::types::{HeldButtons, Key, Modifiers, MouseButton};

/// Current input state for the window.
///
/// The platform layer keeps this up to date while translating events, so
/// payloads can carry positions and held buttons the raw event lacks.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    pub focused: bool,

    /// Pointer position in logical pixels, `None` when outside the window.
    pub pointer_pos: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,

    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Marks `key` as held. Returns false if it was already held.
    pub fn press_key(&mut self, key: Key) -> bool {
        self.keys_down.insert(key)
    }

    /// Marks `key` as released. Returns false if it was not held.
    pub fn release_key(&mut self, key: Key) -> bool {
        self.keys_down.remove(&key)
    }

    pub fn press_button(&mut self, button: MouseButton) -> bool {
        self.buttons_down.insert(button)
    }

    pub fn release_button(&mut self, button: MouseButton) -> bool {
        self.buttons_down.remove(&button)
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            // Releases never arrive for presses made before focus moved away.
            self.keys_down.clear();
            self.buttons_down.clear();
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }

    pub fn held_buttons(&self) -> HeldButtons {
        HeldButtons {
            left: self.button_down(MouseButton::Left),
            right: self.button_down(MouseButton::Right),
            middle: self.button_down(MouseButton::Middle),
        }
    }

    /// Last known pointer position, or the origin.
    pub fn pointer_or_origin(&self) -> (f32, f32) {
        self.pointer_pos.unwrap_or((0.0, 0.0))
    }
}
