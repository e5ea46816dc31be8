use std::collections::HashSet;
use std::hash::Hash;

use crate::coords::Vec2;

use super::frame::{InputFrame, Transitions};
use super::types::{InputEvent, Key, MouseButton, Press};

/// What is held right now in one window.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,
    /// `None` while the pointer is outside the window.
    pub pointer: Option<Vec2>,
    pub keys: HashSet<Key>,
    pub buttons: HashSet<MouseButton>,
}

/// Updates `held` and records a transition only when the held set changed,
/// so auto-repeat never shows up as a fresh press.
fn track<T: Copy + Eq + Hash>(held: &mut HashSet<T>, seen: &mut Transitions<T>, item: T, press: Press) {
    match press {
        Press::Down if held.insert(item) => {
            seen.pressed.insert(item);
        }
        Press::Up if held.remove(&item) => {
            seen.released.insert(item);
        }
        _ => {}
    }
}

impl InputState {
    /// Folds `ev` into the held state and logs it into `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Key { key, press, .. } => track(&mut self.keys, &mut frame.keys, key, press),
            InputEvent::Button { button, press, at } => {
                self.pointer = Some(at);
                track(&mut self.buttons, &mut frame.buttons, button, press);
            }
            InputEvent::PointerMoved(at) => self.pointer = Some(at),
            InputEvent::PointerLeft => self.pointer = None,
            InputEvent::Focused(focused) => {
                self.focused = focused;
                // Releases while unfocused are never delivered.
                if !focused {
                    self.keys.clear();
                    self.buttons.clear();
                }
            }
        }
        frame.events.push(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }
}
