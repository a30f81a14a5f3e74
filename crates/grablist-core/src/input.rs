//! Input state management for mouse/keyboard events.

use crate::document::{ContainerId, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Whether a multi-selection modifier is held (ctrl, meta or shift).
    pub fn is_multi_select(&self) -> bool {
        self.ctrl || self.meta || self.shift
    }
}

/// Keyboard keys the interaction layer cares about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Selection toggle keystroke.
    Space,
    /// Abort keystroke.
    Escape,
    Shift,
    Control,
    Alt,
    Meta,
    Other(String),
}

/// What an input event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    Item(ItemId),
    Container(ContainerId),
    /// Anything outside the lists.
    Background,
}

/// Pointer event type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        target: Target,
        button: MouseButton,
    },
    Up {
        target: Target,
        button: MouseButton,
    },
}

/// Keyboard event type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

/// Tracks pressed buttons, pressed keys and the modifier state they
/// imply across a stream of events.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Currently pressed mouse buttons.
    pressed_buttons: HashSet<MouseButton>,
    /// Current modifier keys state, derived from key transitions.
    modifiers: Modifiers,
    /// Currently pressed keys.
    pressed_keys: HashSet<Key>,
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a pointer event.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) {
        match event {
            PointerEvent::Down { button, .. } => {
                self.pressed_buttons.insert(*button);
            }
            PointerEvent::Up { button, .. } => {
                self.pressed_buttons.remove(button);
            }
        }
    }

    /// Process a key event.
    pub fn handle_key_event(&mut self, event: &KeyEvent) {
        match event {
            KeyEvent::Pressed(key) => {
                self.pressed_keys.insert(key.clone());
            }
            KeyEvent::Released(key) => {
                self.pressed_keys.remove(key);
            }
        }
        self.update_modifiers();
    }

    /// Current modifier keys state.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Check if a button is currently pressed.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Check if a key is currently pressed.
    pub fn is_key_pressed(&self, key: &Key) -> bool {
        self.pressed_keys.contains(key)
    }

    fn update_modifiers(&mut self) {
        self.modifiers = Modifiers {
            shift: self.pressed_keys.contains(&Key::Shift),
            ctrl: self.pressed_keys.contains(&Key::Control),
            alt: self.pressed_keys.contains(&Key::Alt),
            meta: self.pressed_keys.contains(&Key::Meta),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_select_modifiers() {
        assert!(!Modifiers::default().is_multi_select());
        assert!(Modifiers { ctrl: true, ..Default::default() }.is_multi_select());
        assert!(Modifiers { meta: true, ..Default::default() }.is_multi_select());
        assert!(Modifiers { shift: true, ..Default::default() }.is_multi_select());
        // Alt is not a selection modifier.
        assert!(!Modifiers { alt: true, ..Default::default() }.is_multi_select());
    }

    #[test]
    fn test_button_press_and_release() {
        let mut input = InputState::new();
        input.handle_pointer_event(&PointerEvent::Down {
            target: Target::Background,
            button: MouseButton::Left,
        });

        assert!(input.is_button_pressed(MouseButton::Left));
        assert!(!input.is_button_pressed(MouseButton::Right));

        input.handle_pointer_event(&PointerEvent::Up {
            target: Target::Background,
            button: MouseButton::Left,
        });

        assert!(!input.is_button_pressed(MouseButton::Left));
    }

    #[test]
    fn test_key_press_and_release() {
        let mut input = InputState::new();

        input.handle_key_event(&KeyEvent::Pressed(Key::Space));
        assert!(input.is_key_pressed(&Key::Space));

        input.handle_key_event(&KeyEvent::Released(Key::Space));
        assert!(!input.is_key_pressed(&Key::Space));
    }

    #[test]
    fn test_modifiers_follow_key_transitions() {
        let mut input = InputState::new();

        input.handle_key_event(&KeyEvent::Pressed(Key::Shift));
        assert!(input.modifiers().shift);
        assert!(input.modifiers().is_multi_select());

        input.handle_key_event(&KeyEvent::Released(Key::Shift));
        assert!(!input.modifiers().is_multi_select());
    }
}
