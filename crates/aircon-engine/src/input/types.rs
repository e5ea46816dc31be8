use crate::coords::Vec2;

/// Keys applications react to. Anything else arrives as `Other` with the
/// platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Other(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Direction of a key or button transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Press {
    Down,
    Up,
}

impl Press {
    pub fn from_pressed(pressed: bool) -> Self {
        if pressed { Press::Down } else { Press::Up }
    }
}

/// Platform-agnostic input event. Positions are logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        press: Press,
        /// OS auto-repeat.
        repeat: bool,
    },
    Button {
        button: MouseButton,
        press: Press,
        at: Vec2,
    },
    PointerMoved(Vec2),
    /// The pointer left the window surface.
    PointerLeft,
    Focused(bool),
}
