use std::collections::HashSet;
use std::hash::Hash;

use super::types::{InputEvent, Key, MouseButton};

/// Presses and releases of one kind of input within a frame.
#[derive(Debug, Clone)]
pub struct Transitions<T> {
    pub pressed: HashSet<T>,
    pub released: HashSet<T>,
}

impl<T> Default for Transitions<T> {
    fn default() -> Self {
        Self { pressed: HashSet::new(), released: HashSet::new() }
    }
}

impl<T: Eq + Hash> Transitions<T> {
    fn clear(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }
}

/// Everything that happened since the last frame.
///
/// The runtime clears it once the frame was handed to the application.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Arrival order.
    pub events: Vec<InputEvent>,
    pub keys: Transitions<Key>,
    pub buttons: Transitions<MouseButton>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys.clear();
        self.buttons.clear();
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys.pressed.contains(&key)
    }

    pub fn button_pressed(&self, button: MouseButton) -> bool {
        self.buttons.pressed.contains(&button)
    }
}
