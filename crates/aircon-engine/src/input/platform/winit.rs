//! winit → engine input events.

use winit::event::{ElementState, KeyEvent, MouseButton as WinitButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use crate::coords::Vec2;
use crate::input::{InputEvent, InputState, Key, MouseButton, Press};

/// `None` for events input tracking ignores (resize, redraw, IME, ...).
pub(crate) fn translate_window_event(
    window: &Window,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    let ev = match event {
        WindowEvent::CursorMoved { position, .. } => {
            let p = position.to_logical::<f32>(window.scale_factor());
            InputEvent::PointerMoved(Vec2::new(p.x, p.y))
        }
        WindowEvent::CursorLeft { .. } => InputEvent::PointerLeft,
        WindowEvent::MouseInput { state: element, button, .. } => pointer_button(state, *element, *button),
        WindowEvent::KeyboardInput { event, .. } => key_event(event),
        WindowEvent::Focused(focused) => InputEvent::Focused(*focused),
        _ => return None,
    };
    Some(ev)
}

/// winit does not attach a position to button events; use the last known one.
fn pointer_button(state: &InputState, element: ElementState, button: WinitButton) -> InputEvent {
    InputEvent::Button {
        button: match button {
            WinitButton::Left => MouseButton::Left,
            WinitButton::Right => MouseButton::Right,
            WinitButton::Middle => MouseButton::Middle,
            WinitButton::Back => MouseButton::Other(3),
            WinitButton::Forward => MouseButton::Other(4),
            WinitButton::Other(n) => MouseButton::Other(n),
        },
        press: Press::from_pressed(element.is_pressed()),
        at: state.pointer.unwrap_or(Vec2::ZERO),
    }
}

fn key_event(event: &KeyEvent) -> InputEvent {
    let key = match event.physical_key {
        PhysicalKey::Code(code) => key_from_code(code),
        PhysicalKey::Unidentified(_) => Key::Other(0),
    };
    InputEvent::Key {
        key,
        press: Press::from_pressed(event.state.is_pressed()),
        repeat: event.repeat,
    }
}

/// Physical key positions, so the arrows and space work on every layout.
fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::Space => Key::Space,
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        other => Key::Other(other as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulation_keys_map_by_position() {
        assert_eq!(key_from_code(KeyCode::ArrowUp), Key::ArrowUp);
        assert_eq!(key_from_code(KeyCode::ArrowDown), Key::ArrowDown);
        assert_eq!(key_from_code(KeyCode::Space), Key::Space);
        assert_eq!(key_from_code(KeyCode::Escape), Key::Escape);
        assert_eq!(key_from_code(KeyCode::NumpadEnter), Key::Enter);
    }

    #[test]
    fn unlisted_keys_keep_their_code() {
        assert_eq!(key_from_code(KeyCode::KeyQ), Key::Other(KeyCode::KeyQ as u32));
    }

    #[test]
    fn button_uses_last_pointer_position() {
        let state = InputState { pointer: Some(Vec2::new(12.0, 34.0)), ..InputState::default() };
        let ev = pointer_button(&state, ElementState::Pressed, WinitButton::Left);
        assert_eq!(
            ev,
            InputEvent::Button { button: MouseButton::Left, press: Press::Down, at: Vec2::new(12.0, 34.0) }
        );
    }

    #[test]
    fn button_without_pointer_lands_at_origin() {
        let ev = pointer_button(&InputState::default(), ElementState::Released, WinitButton::Right);
        assert_eq!(
            ev,
            InputEvent::Button { button: MouseButton::Right, press: Press::Up, at: Vec2::ZERO }
        );
    }
}
